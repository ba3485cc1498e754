//! Errors raised while loading a driver configuration.
//!
//! Messages name the offending key or position, never its value: a config
//! document holds credentials, and errors end up in logs.

use thiserror::Error;

/// Reasons a SolidFire backend document is rejected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid driver configuration document at line {line}, column {column}")]
    Json {
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
    },

    /// The `version` key does not match the supported config version.
    #[error("unsupported config version {found}; expected {expected}")]
    UnsupportedVersion {
        /// Version found in the document.
        found: i32,
        /// Version this crate understands.
        expected: i32,
    },

    /// The document is for another storage driver.
    #[error("storage driver `{0}` is not supported; expected `solidfire-san`")]
    UnsupportedDriver(String),

    /// A required key is missing or empty.
    #[error("missing required configuration key `{0}`")]
    MissingField(&'static str),

    /// The endpoint is not URL-shaped.
    #[error("invalid EndPoint: {reason}")]
    InvalidEndpoint {
        /// Why the endpoint was rejected.
        reason: &'static str,
    },

    /// `DefaultBlockSize` is neither 512 nor 4096.
    #[error("invalid DefaultBlockSize {0}; expected 512 or 4096")]
    InvalidBlockSize(i64),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            line: err.line(),
            column: err.column(),
        }
    }
}
