//! Redaction policies, field listing, and the two representations.
//!
//! This module ties the pieces together:
//!
//! - **`flags`**: Control input - typed trace flags and the reveal predicate
//! - **`field`**: Domain layer - what a config lists (`RedactedFields`, `ConfigField`)
//! - **`policy`**: Policy layer - how a hidden value looks (`TextRedactionPolicy`)
//! - **`format`**: Application layer - the shared core and the display/debug layouts
//!
//! Classification markers live in `crate::classification`.

mod field;
mod flags;
mod format;
mod policy;

pub use field::{ConfigField, Exposure, RedactedFields, RenderValue};
pub use flags::{should_reveal_sensitive, DebugTraceFlags};
pub use format::{
    fmt_debug, fmt_display, redact_fields, to_debug_string, to_display_string, RedactedField,
};
pub use policy::{
    redact_url_credentials, RedactionPolicy, TextRedactionPolicy, REDACTED_PLACEHOLDER,
};
