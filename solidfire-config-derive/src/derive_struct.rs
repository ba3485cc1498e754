//! Struct-specific `RedactedFields` derivation.
//!
//! This module turns each named field into one entry of the generated field list
//! and works out where the container's trace flags come from.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Fields, LitStr, Result};

use crate::{
    crate_path,
    layout::{default_label, parse_field_layout, FieldLayout},
    strategy::{parse_field_strategy, Strategy},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) fields_body: TokenStream,
    pub(crate) trace_flags_body: TokenStream,
}

pub(crate) fn derive_struct(data: &DataStruct) -> Result<StructDeriveOutput> {
    let fields = match &data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "`RedactedFields` requires named fields so every value has a label",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new(
                data.struct_token.span(),
                "`RedactedFields` cannot be derived for unit structs",
            ));
        }
    };

    let field_path = crate_path("ConfigField");
    let fields_trait = crate_path("RedactedFields");

    let mut pushes = Vec::new();
    let mut flattened = Vec::new();
    let mut trace_flags_field: Option<Ident> = None;

    for field in &fields.named {
        let span = field.span();
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(span, "named field should have an identifier"))?;
        let strategy = parse_field_strategy(&field.attrs)?;
        let layout = parse_field_layout(&field.attrs)?;
        check_combination(&strategy, &layout, span)?;

        if layout.trace_flags {
            if trace_flags_field.is_some() {
                return Err(syn::Error::new(
                    span,
                    "only one field can be marked #[config(trace_flags)]",
                ));
            }
            trace_flags_field = Some(ident.clone());
        }

        if layout.skip {
            continue;
        }

        if layout.flatten {
            let exposure = if layout.verbose {
                quote! { .map(#field_path::verbose) }
            } else {
                quote! {}
            };
            pushes.push(quote_spanned! { span =>
                fields.extend(#fields_trait::fields(&self.#ident).into_iter()#exposure);
            });
            flattened.push(ident);
            continue;
        }

        let label = layout
            .label
            .clone()
            .unwrap_or_else(|| LitStr::new(&default_label(&ident.to_string()), ident.span()));
        let entry = field_entry(&strategy, &label, &ident, &field_path);
        let exposure = if layout.verbose {
            quote! { .verbose() }
        } else {
            quote! {}
        };
        pushes.push(quote_spanned! { span =>
            fields.push(#entry #exposure);
        });
    }

    let fields_body = quote! {
        #[allow(unused_mut)]
        let mut fields = ::std::vec::Vec::new();
        #(#pushes)*
        fields
    };

    let trace_flags_body = if let Some(ident) = trace_flags_field {
        quote! { ::core::option::Option::Some(&self.#ident) }
    } else {
        quote! {
            ::core::option::Option::None
                #(.or_else(|| #fields_trait::trace_flags(&self.#flattened)))*
        }
    };

    Ok(StructDeriveOutput {
        fields_body,
        trace_flags_body,
    })
}

fn field_entry(
    strategy: &Strategy,
    label: &LitStr,
    ident: &Ident,
    field_path: &TokenStream,
) -> TokenStream {
    match strategy {
        Strategy::Public => quote! {
            #field_path::public(#label, &self.#ident)
        },
        Strategy::Redact => {
            let policy_path = crate_path("TextRedactionPolicy");
            quote! {
                #field_path::sensitive(#label, &self.#ident, #policy_path::Full)
            }
        }
        Strategy::Classify(classification) => {
            let policy_trait = crate_path("RedactionPolicy");
            quote! {
                #field_path::sensitive(
                    #label,
                    &self.#ident,
                    <#classification as #policy_trait>::policy(),
                )
            }
        }
        // The value is never referenced, so its type needs no rendering support.
        Strategy::Withhold => quote! {
            #field_path::withheld(#label)
        },
    }
}

fn check_combination(
    strategy: &Strategy,
    layout: &FieldLayout,
    span: proc_macro2::Span,
) -> Result<()> {
    if layout.flatten && strategy.is_sensitive() {
        return Err(syn::Error::new(
            span,
            "#[config(flatten)] cannot be combined with #[sensitive]; mark the nested fields instead",
        ));
    }
    if layout.flatten && layout.label.is_some() {
        return Err(syn::Error::new(
            span,
            "#[config(flatten)] fields have no label of their own",
        ));
    }
    if layout.trace_flags && strategy.is_sensitive() {
        return Err(syn::Error::new(
            span,
            "#[config(trace_flags)] cannot be combined with #[sensitive]",
        ));
    }
    if layout.trace_flags && layout.flatten {
        return Err(syn::Error::new(
            span,
            "#[config(trace_flags)] marks a `DebugTraceFlags` field and cannot be flattened",
        ));
    }
    Ok(())
}
