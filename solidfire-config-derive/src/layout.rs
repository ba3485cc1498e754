//! Parsing of `#[config(...)]` field attributes.
//!
//! Layout options decide where a field shows up and under which label. They never
//! decide whether its value is revealed; that is the job of `#[sensitive]`.

use syn::{Attribute, LitStr, Meta, Result};

/// Layout options parsed from field-level `#[config(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldLayout {
    /// Explicit label; defaults to the field name in UpperCamelCase.
    pub(crate) label: Option<LitStr>,
    /// Only rendered by the debug representation.
    pub(crate) verbose: bool,
    /// Splice the nested field list in place of this field.
    pub(crate) flatten: bool,
    /// Leave the field out of both representations.
    pub(crate) skip: bool,
    /// This field carries the trace flags of the container.
    pub(crate) trace_flags: bool,
}

pub(crate) fn parse_field_layout(attrs: &[Attribute]) -> Result<FieldLayout> {
    let mut layout = FieldLayout::default();

    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("label") {
                        if layout.label.is_some() {
                            return Err(meta.error("duplicate field option `label`"));
                        }
                        layout.label = Some(meta.value()?.parse::<LitStr>()?);
                    } else if meta.path.is_ident("verbose") {
                        layout.verbose = true;
                    } else if meta.path.is_ident("flatten") {
                        layout.flatten = true;
                    } else if meta.path.is_ident("skip") {
                        layout.skip = true;
                    } else if meta.path.is_ident("trace_flags") {
                        layout.trace_flags = true;
                    } else {
                        return Err(meta.error(format!(
                            "unknown field option `{}`; expected `label`, `verbose`, `flatten`, `skip` or `trace_flags`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )));
                    }
                    Ok(())
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for field-level #[config]",
                ));
            }
        }
    }

    Ok(layout)
}

/// Converts a snake_case field name into the UpperCamelCase label used in output.
///
/// `tenant_name` becomes `TenantName`. Acronyms need an explicit
/// `#[config(label = "...")]`.
pub(crate) fn default_label(field_name: &str) -> String {
    let field_name = field_name.strip_prefix("r#").unwrap_or(field_name);
    field_name
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect()
}
