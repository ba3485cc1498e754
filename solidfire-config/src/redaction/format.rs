//! Application layer: the shared redaction core and the two representations.
//!
//! [`redact_fields`] consults the reveal predicate once and returns every field
//! already in its final textual form. [`fmt_display`] and [`fmt_debug`] only choose
//! which of those fields to print and how to lay them out; they never look at a
//! raw value.

use std::fmt;

use super::{
    field::{Exposure, FieldSource, RedactedFields},
    flags::should_reveal_sensitive,
    policy::REDACTED_PLACEHOLDER,
};

/// A field in its final textual form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedactedField {
    /// Label printed in front of the value.
    pub label: &'static str,
    /// Where the field is shown.
    pub exposure: Exposure,
    /// The rendered value, or its redacted form.
    pub value: String,
    /// Whether `value` is a redacted form rather than the real value.
    pub redacted: bool,
}

/// Lists the fields of `config` with the redaction policy applied.
///
/// Sensitive fields are revealed only when the config's trace flags explicitly
/// enable `sensitive`. Withheld fields always yield [`REDACTED_PLACEHOLDER`].
#[must_use]
pub fn redact_fields<T>(config: &T) -> Vec<RedactedField>
where
    T: RedactedFields + ?Sized,
{
    let reveal = should_reveal_sensitive(config.trace_flags());
    config
        .fields()
        .into_iter()
        .map(|field| {
            let (value, redacted) = match field.source {
                FieldSource::Public(value) => (value.render(), false),
                FieldSource::Sensitive { value, .. } if reveal => (value.render(), false),
                FieldSource::Sensitive { value, policy } => {
                    (policy.apply_to(&value.render()), true)
                }
                FieldSource::Withheld => (REDACTED_PLACEHOLDER.to_string(), true),
            };
            RedactedField {
                label: field.label,
                exposure: field.exposure,
                value,
                redacted,
            }
        })
        .collect()
}

/// Writes the concise representation: `Name{Label:value ...}` with summary fields only.
pub fn fmt_display<T>(config: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: RedactedFields + ?Sized,
{
    write_display(config, f)
}

/// Writes the verbose representation: every listed field.
///
/// The alternate flag (`{:#?}`) puts one field per line.
pub fn fmt_debug<T>(config: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: RedactedFields + ?Sized,
{
    let multiline = f.alternate();
    write_debug(config, f, multiline)
}

/// Returns the concise representation of `config` as a string.
#[must_use]
pub fn to_display_string<T>(config: &T) -> String
where
    T: RedactedFields + ?Sized,
{
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_display(config, &mut out);
    out
}

/// Returns the verbose representation of `config` as a string.
#[must_use]
pub fn to_debug_string<T>(config: &T) -> String
where
    T: RedactedFields + ?Sized,
{
    let mut out = String::new();
    let _ = write_debug(config, &mut out, false);
    out
}

fn write_display<T, W>(config: &T, out: &mut W) -> fmt::Result
where
    T: RedactedFields + ?Sized,
    W: fmt::Write + ?Sized,
{
    let fields = redact_fields(config);
    write_fields(
        out,
        config.type_name(),
        fields
            .iter()
            .filter(|field| field.exposure == Exposure::Summary),
        false,
    )
}

fn write_debug<T, W>(config: &T, out: &mut W, multiline: bool) -> fmt::Result
where
    T: RedactedFields + ?Sized,
    W: fmt::Write + ?Sized,
{
    let fields = redact_fields(config);
    write_fields(out, config.type_name(), fields.iter(), multiline)
}

fn write_fields<'f, W>(
    out: &mut W,
    type_name: &str,
    fields: impl Iterator<Item = &'f RedactedField>,
    multiline: bool,
) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    out.write_str(type_name)?;
    out.write_str("{")?;
    let mut empty = true;
    for (index, field) in fields.enumerate() {
        empty = false;
        if multiline {
            out.write_str("\n    ")?;
        } else if index > 0 {
            out.write_str(" ")?;
        }
        out.write_str(field.label)?;
        out.write_str(":")?;
        out.write_str(&field.value)?;
    }
    if multiline && !empty {
        out.write_str("\n")?;
    }
    out.write_str("}")
}

#[cfg(test)]
mod tests {
    use super::{redact_fields, to_debug_string, to_display_string};
    use crate::{
        ConfigField, DebugTraceFlags, Exposure, RedactedFields, TextRedactionPolicy,
        REDACTED_PLACEHOLDER,
    };

    struct Sample {
        name: String,
        secret: String,
        size: i64,
        flags: Option<DebugTraceFlags>,
    }

    impl RedactedFields for Sample {
        fn type_name(&self) -> &'static str {
            "Sample"
        }

        fn fields(&self) -> Vec<ConfigField<'_>> {
            vec![
                ConfigField::public("Name", &self.name),
                ConfigField::sensitive("Secret", &self.secret, TextRedactionPolicy::Full),
                ConfigField::public("Size", &self.size).verbose(),
                ConfigField::withheld("Handle"),
            ]
        }

        fn trace_flags(&self) -> Option<&DebugTraceFlags> {
            self.flags.as_ref()
        }
    }

    fn sample(flags: Option<DebugTraceFlags>) -> Sample {
        Sample {
            name: "pool".to_string(),
            secret: "hunter2".to_string(),
            size: 512,
            flags,
        }
    }

    fn revealing() -> Option<DebugTraceFlags> {
        Some([("sensitive", true)].into_iter().collect())
    }

    #[test]
    fn hidden_fields_use_marker() {
        let fields = redact_fields(&sample(None));
        assert_eq!(fields[1].value, REDACTED_PLACEHOLDER);
        assert!(fields[1].redacted);
        assert_eq!(fields[3].value, REDACTED_PLACEHOLDER);
        assert!(!fields[0].redacted);
    }

    #[test]
    fn reveal_flag_shows_sensitive_but_not_withheld() {
        let fields = redact_fields(&sample(revealing()));
        assert_eq!(fields[1].value, "hunter2");
        assert!(!fields[1].redacted);
        assert_eq!(fields[3].value, REDACTED_PLACEHOLDER);
        assert!(fields[3].redacted);
    }

    #[test]
    fn display_shows_summary_fields_only() {
        assert_eq!(
            to_display_string(&sample(None)),
            "Sample{Name:pool Secret:<REDACTED> Handle:<REDACTED>}"
        );
    }

    #[test]
    fn debug_shows_verbose_fields() {
        assert_eq!(
            to_debug_string(&sample(None)),
            "Sample{Name:pool Secret:<REDACTED> Size:512 Handle:<REDACTED>}"
        );
        assert_eq!(
            to_debug_string(&sample(revealing())),
            "Sample{Name:pool Secret:hunter2 Size:512 Handle:<REDACTED>}"
        );
    }

    #[test]
    fn summary_fields_agree_between_representations() {
        for flags in [None, Some(DebugTraceFlags::default()), revealing()] {
            let config = sample(flags);
            let display = to_display_string(&config);
            let debug = to_debug_string(&config);
            for field in redact_fields(&config)
                .iter()
                .filter(|field| field.exposure == Exposure::Summary)
            {
                let entry = format!("{}:{}", field.label, field.value);
                assert!(display.contains(&entry), "{display} lacks {entry}");
                assert!(debug.contains(&entry), "{debug} lacks {entry}");
            }
        }
    }

    #[test]
    fn output_is_deterministic() {
        let config = sample(None);
        assert_eq!(to_debug_string(&config), to_debug_string(&config));
        assert_eq!(to_display_string(&config), to_display_string(&config));
    }
}
