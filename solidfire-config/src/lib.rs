//! SolidFire SAN driver configuration with redacted textual representations.
//!
//! This crate separates:
//! - **Sensitivity**: which configuration fields hold credentials or identities.
//! - **Reveal policy**: whether the driver's trace flags allow showing them.
//! - **Layout**: how the concise display form and the verbose debug form are laid out.
//!
//! The derive macro walks a config struct and lists its fields once. Both the
//! `Display` and the `Debug` form are built from [`redact_fields`], so the
//! decision to reveal or hide a value is taken in exactly one place.
//!
//! Key rules:
//! - Use `#[sensitive]` for values that are hidden unless the `sensitive` trace
//!   flag is explicitly set.
//! - Use `#[sensitive(Classification)]` to pick a partial policy, e.g.
//!   `#[sensitive(Endpoint)]` keeps the URL host and hides its credentials.
//! - Use `#[sensitive(always)]` for values that are never printed, such as the
//!   live API client handle.
//! - Unannotated fields are always shown.
//! - Every hidden value prints as the literal [`REDACTED_PLACEHOLDER`] (`<REDACTED>`).
//!
//! What this crate does:
//! - defines the driver, common and API client configuration models
//! - loads the driver configuration from its JSON backend document
//! - formats any [`RedactedFields`] type without leaking hidden values
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - talk to the storage backend or provision volumes
//! - perform I/O or logging on its own

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use solidfire_config_derive::RedactedFields;

#[allow(unused_extern_crates)]
extern crate self as solidfire_config;

// Module declarations
pub mod api;
mod classification;
mod config;
mod driver;
mod error;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use classification::{AccountId, Classification, Endpoint, Secret};
pub use config::{
    CommonStorageDriverConfig, QoS, SolidfireStorageDriverConfig, VolType, CONFIG_VERSION,
    DEFAULT_BLOCK_SIZE, DEFAULT_INITIATOR_IFACE, DEFAULT_LEGACY_NAME_PREFIX,
    SOLIDFIRE_SAN_DRIVER_NAME,
};
pub use driver::{SanStorageDriver, DEFAULT_MAX_IOPS, DEFAULT_MIN_IOPS};
pub use error::ConfigError;
pub use redaction::{
    fmt_debug, fmt_display, redact_fields, redact_url_credentials, should_reveal_sensitive,
    to_debug_string, to_display_string, ConfigField, DebugTraceFlags, Exposure, RedactedField,
    RedactedFields, RedactionPolicy, RenderValue, TextRedactionPolicy, REDACTED_PLACEHOLDER,
};
