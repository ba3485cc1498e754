//! Parsing of `#[sensitive(...)]` field attributes.
//!
//! This module maps attribute syntax to redaction decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Field redaction strategy based on `#[sensitive(...)]` attributes.
///
/// ## Strategy Mapping
///
/// | Attribute | Strategy | Behavior when hidden | Behavior when revealed |
/// |-----------|----------|----------------------|------------------------|
/// | None | `Public` | value | value |
/// | `#[sensitive]` | `Redact` | marker | value |
/// | `#[sensitive(Class)]` | `Classify(Class)` | classification policy | value |
/// | `#[sensitive(always)]` | `Withhold` | marker | marker |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No annotation: always rendered.
    Public,
    /// Bare `#[sensitive]`: full marker while redaction is in effect.
    Redact,
    /// `#[sensitive(Classification)]`: the classification's policy while
    /// redaction is in effect.
    Classify(syn::Path),
    /// `#[sensitive(always)]`: never rendered, whatever the trace flags say.
    Withhold,
}

impl Strategy {
    pub(crate) fn is_sensitive(&self) -> bool {
        !matches!(self, Self::Public)
    }
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[sensitive] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("sensitive") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                set_strategy(&mut strategy, Strategy::Redact, attr.span())?;
            }
            Meta::List(list) => match syn::parse2::<syn::Path>(list.tokens.clone()) {
                Ok(path) if path.is_ident("always") => {
                    set_strategy(&mut strategy, Strategy::Withhold, attr.span())?;
                }
                Ok(path) => {
                    set_strategy(&mut strategy, Strategy::Classify(path), attr.span())?;
                }
                Err(_) => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected `always` or a classification type (e.g., #[sensitive(Endpoint)])",
                    ));
                }
            },
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[sensitive]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Public))
}
