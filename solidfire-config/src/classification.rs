//! Marker types for "what kind of sensitive configuration value is this?"
//!
//! These types are zero-sized. They exist only at the type level so a redaction
//! policy can be attached to a field with `#[sensitive(Classification)]`.

/// Marker trait for classification categories.
///
/// Implement this for zero-sized marker types (unit structs), together with
/// [`crate::RedactionPolicy`]:
///
/// ```rust
/// use solidfire_config::{Classification, RedactionPolicy, TextRedactionPolicy};
///
/// #[derive(Clone, Copy)]
/// struct ChapSecret;
///
/// impl Classification for ChapSecret {}
///
/// impl RedactionPolicy for ChapSecret {
///     fn policy() -> TextRedactionPolicy {
///         TextRedactionPolicy::Full
///     }
/// }
/// ```
pub trait Classification {}

/// Classification marker for backend-issued account identifiers.
#[derive(Clone, Copy)]
pub struct AccountId;
impl Classification for AccountId {}

/// Classification marker for control-plane endpoints that embed
/// `user:password@` credentials.
#[derive(Clone, Copy)]
pub struct Endpoint;
impl Classification for Endpoint {}

/// Classification marker for secrets such as passwords or CHAP secrets.
#[derive(Clone, Copy)]
pub struct Secret;
impl Classification for Secret {}
