//! Domain layer: configuration types listed field by field.
//!
//! This module defines the core pieces the formatters consume:
//!
//! - [`RedactedFields`]: Types that list their fields for formatting (usually derived)
//! - [`ConfigField`]: One listed field, still holding a borrowed, unredacted value
//! - [`RenderValue`]: Plain-text rendering of a field value
//!
//! ## Field Handling
//!
//! The derive macro generates one entry per field based on its annotations:
//!
//! | Annotation | Generated entry |
//! |------------|-----------------|
//! | None | `ConfigField::public` |
//! | `#[sensitive]` | `ConfigField::sensitive` with the full-marker policy |
//! | `#[sensitive(Class)]` | `ConfigField::sensitive` with `Class::policy()` |
//! | `#[sensitive(always)]` | `ConfigField::withheld` |
//!
//! A `ConfigField` never renders itself. Turning it into text happens in
//! [`super::format::redact_fields`], where the reveal decision is taken once.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Write as _,
    sync::Arc,
};

use super::{flags::DebugTraceFlags, policy::TextRedactionPolicy};

/// Where a field is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exposure {
    /// Shown by both the display and the debug representation.
    Summary,
    /// Shown only by the debug representation.
    Verbose,
}

pub(crate) enum FieldSource<'a> {
    Public(&'a dyn RenderValue),
    Sensitive {
        value: &'a dyn RenderValue,
        policy: TextRedactionPolicy,
    },
    Withheld,
}

/// A single configuration field as listed by [`RedactedFields::fields`].
pub struct ConfigField<'a> {
    pub(crate) label: &'static str,
    pub(crate) exposure: Exposure,
    pub(crate) source: FieldSource<'a>,
}

impl<'a> ConfigField<'a> {
    /// A field that is always shown.
    #[must_use]
    pub fn public(label: &'static str, value: &'a dyn RenderValue) -> Self {
        Self {
            label,
            exposure: Exposure::Summary,
            source: FieldSource::Public(value),
        }
    }

    /// A field shown only when the trace flags reveal sensitive values; otherwise
    /// `policy` produces its hidden form.
    #[must_use]
    pub fn sensitive(
        label: &'static str,
        value: &'a dyn RenderValue,
        policy: TextRedactionPolicy,
    ) -> Self {
        Self {
            label,
            exposure: Exposure::Summary,
            source: FieldSource::Sensitive { value, policy },
        }
    }

    /// A field whose value is never shown, whatever the trace flags say.
    #[must_use]
    pub fn withheld(label: &'static str) -> Self {
        Self {
            label,
            exposure: Exposure::Summary,
            source: FieldSource::Withheld,
        }
    }

    /// Restricts the field to the debug representation.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.exposure = Exposure::Verbose;
        self
    }

    /// The label printed in front of the value.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Where the field is shown.
    pub fn exposure(&self) -> Exposure {
        self.exposure
    }

    /// Whether the field's value can be hidden.
    pub fn is_sensitive(&self) -> bool {
        !matches!(self.source, FieldSource::Public(_))
    }
}

/// A configuration type that lists its fields for redacted formatting.
///
/// Derive it with `#[derive(RedactedFields)]`; the derive also provides `Display`
/// and `Debug` impls routed through [`crate::fmt_display`] and [`crate::fmt_debug`].
pub trait RedactedFields {
    /// Name printed in front of the field list.
    fn type_name(&self) -> &'static str;

    /// Lists the fields in output order.
    fn fields(&self) -> Vec<ConfigField<'_>>;

    /// Flags deciding whether sensitive fields are revealed. `None` means hidden.
    fn trace_flags(&self) -> Option<&DebugTraceFlags> {
        None
    }
}

/// Plain-text rendering of a configuration value.
///
/// Strings print without quotes, missing optional values print as `<nil>`,
/// sequences as `[a b]` and maps as `map[k:v]`.
pub trait RenderValue {
    /// Appends the rendered value to `out`.
    fn render_into(&self, out: &mut String);

    /// Renders the value into a new string.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl RenderValue for str {
    fn render_into(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl RenderValue for String {
    fn render_into(&self, out: &mut String) {
        out.push_str(self);
    }
}

macro_rules! impl_render_value_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RenderValue for $ty {
                fn render_into(&self, out: &mut String) {
                    let _ = write!(out, "{self}");
                }
            }
        )*
    };
}

impl_render_value_display!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T> RenderValue for &T
where
    T: RenderValue + ?Sized,
{
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out);
    }
}

impl<T> RenderValue for Box<T>
where
    T: RenderValue + ?Sized,
{
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out);
    }
}

impl<T> RenderValue for Arc<T>
where
    T: RenderValue + ?Sized,
{
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out);
    }
}

impl<T> RenderValue for Option<T>
where
    T: RenderValue,
{
    fn render_into(&self, out: &mut String) {
        match self {
            Some(value) => value.render_into(out),
            None => out.push_str("<nil>"),
        }
    }
}

impl<T> RenderValue for [T]
where
    T: RenderValue,
{
    fn render_into(&self, out: &mut String) {
        out.push('[');
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            value.render_into(out);
        }
        out.push(']');
    }
}

impl<T> RenderValue for Vec<T>
where
    T: RenderValue,
{
    fn render_into(&self, out: &mut String) {
        self.as_slice().render_into(out);
    }
}

impl<T> RenderValue for BTreeSet<T>
where
    T: RenderValue,
{
    fn render_into(&self, out: &mut String) {
        out.push('[');
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            value.render_into(out);
        }
        out.push(']');
    }
}

impl<K, V> RenderValue for BTreeMap<K, V>
where
    K: RenderValue,
    V: RenderValue,
{
    fn render_into(&self, out: &mut String) {
        out.push_str("map[");
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            key.render_into(out);
            out.push(':');
            value.render_into(out);
        }
        out.push(']');
    }
}

impl RenderValue for DebugTraceFlags {
    fn render_into(&self, out: &mut String) {
        let flags: BTreeMap<String, bool> = self.clone().into();
        flags.render_into(out);
    }
}
