//! Adapters for logging driver configurations through `slog`.
//!
//! Both adapters are built from [`redact_fields`], so a logged configuration
//! hides exactly what its `Display` and `Debug` forms hide:
//!
//! - [`IntoRedactedLog::redacted_display`] emits the concise representation as a
//!   plain string.
//! - [`IntoRedactedLog::redacted_json`] emits every field as structured JSON via
//!   `slog`'s nested-value support.
//!
//! This module does not configure `slog` and never logs on its own.

use serde_json::{Map, Value as JsonValue};
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{redact_fields, to_display_string, RedactedFields};

/// A `slog::Value` that emits the concise representation of a configuration.
pub struct RedactedDisplay {
    text: String,
}

impl SlogValue for RedactedDisplay {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_arguments(key, &format_args!("{}", self.text))
    }
}

/// A `slog::Value` that emits the redacted fields of a configuration as a JSON object.
///
/// The object maps each label to its rendered value, plus a `"type"` key holding
/// the type name. Hidden values appear in their redacted form.
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    /// The JSON object that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts configurations into `slog` values that carry only their redacted form.
///
/// ## Example
/// ```ignore
/// use solidfire_config::slog::IntoRedactedLog;
///
/// info!(logger, "driver initialized"; "config" => driver.redacted_display());
/// debug!(logger, "driver state"; "driver" => driver.redacted_json());
/// ```
pub trait IntoRedactedLog: RedactedFields {
    /// The concise representation, as logged text.
    fn redacted_display(&self) -> RedactedDisplay {
        RedactedDisplay {
            text: to_display_string(self),
        }
    }

    /// Every field with the redaction policy applied, as structured JSON.
    fn redacted_json(&self) -> RedactedJson {
        let mut object = Map::new();
        object.insert(
            "type".to_string(),
            JsonValue::String(self.type_name().to_string()),
        );
        for field in redact_fields(self) {
            object.insert(field.label.to_string(), JsonValue::String(field.value));
        }
        RedactedJson {
            value: JsonValue::Object(object),
        }
    }
}

impl<T> IntoRedactedLog for T where T: RedactedFields + ?Sized {}
