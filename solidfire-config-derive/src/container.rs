//! Container-level attribute parsing for `#[derive(RedactedFields)]`.
//!
//! This module handles `#[config(...)]` attributes on the struct itself, not on fields.

use syn::{Attribute, LitStr, Meta, Result};

/// Options parsed from container-level `#[config(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Type name printed in front of both representations.
    pub(crate) name: Option<LitStr>,
    /// If true, skip generating the `Debug` impl.
    pub(crate) skip_debug: bool,
    /// If true, skip generating the `Display` impl.
    pub(crate) skip_display: bool,
}

/// Parses container-level `#[config(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                // Bare #[config] on container - no meaning, ignore
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip_debug") {
                        options.skip_debug = true;
                        Ok(())
                    } else if meta.path.is_ident("skip_display") {
                        options.skip_display = true;
                        Ok(())
                    } else if meta.path.is_ident("name") {
                        if options.name.is_some() {
                            return Err(meta.error("duplicate container option `name`"));
                        }
                        options.name = Some(meta.value()?.parse::<LitStr>()?);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `name`, `skip_debug` or `skip_display`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[config]",
                ));
            }
        }
    }

    Ok(options)
}
