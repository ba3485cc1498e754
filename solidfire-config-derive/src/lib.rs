//! Derive macros for `solidfire-config`.
//!
//! This crate generates the field walk behind `#[derive(RedactedFields)]`. It:
//! - reads `#[sensitive(...)]` and `#[config(...)]` field attributes
//! - emits a `RedactedFields` implementation listing every field with its label,
//!   exposure and sensitivity
//! - emits `Display` and `Debug` implementations that format through the shared
//!   redaction core
//!
//! It does **not** decide whether a value is revealed. That decision lives in the
//! main `solidfire-config` crate and is taken at format time.

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

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, LitStr, Result};

mod container;
mod derive_struct;
mod layout;
mod strategy;
use container::{parse_container_options, ContainerOptions};
use derive_struct::derive_struct;

/// Derives `solidfire_config::RedactedFields` (and the formatting impls) for structs.
///
/// # Container Attributes
///
/// - `#[config(name = "SANStorageDriver")]` - Type name used as the prefix of both
///   representations. Defaults to the struct identifier.
/// - `#[config(skip_debug)]` / `#[config(skip_display)]` - Opt out of the generated
///   `Debug` / `Display` impl.
///
/// # Field Attributes
///
/// Sensitivity:
///
/// - **No annotation**: the field is public and always rendered through `RenderValue`.
/// - `#[sensitive]`: replaced by the redaction marker unless the trace flags reveal
///   sensitive values.
/// - `#[sensitive(Classification)]`: like `#[sensitive]`, but the hidden form comes from
///   the classification's `RedactionPolicy` (e.g. `#[sensitive(Endpoint)]` keeps the
///   URL host).
/// - `#[sensitive(always)]`: replaced by the redaction marker regardless of the trace
///   flags. The field's type needs no `RenderValue` impl.
///
/// Layout:
///
/// - `#[config(label = "SVIP")]` - Label override. Defaults to the field name in
///   UpperCamelCase.
/// - `#[config(verbose)]` - Only rendered by the debug representation.
/// - `#[config(flatten)]` - Splices the fields of a nested `RedactedFields` value in place.
/// - `#[config(skip)]` - Not rendered at all.
/// - `#[config(trace_flags)]` - This `DebugTraceFlags` field decides whether sensitive
///   values are revealed. Without one, the first flattened field that has trace flags
///   is used.
///
/// Enums, unions, tuple structs and unit structs are rejected at compile time.
#[proc_macro_derive(RedactedFields, attributes(sensitive, config))]
pub fn derive_redacted_fields(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the `solidfire-config` crate root.
///
/// Handles crate renaming (e.g., `sfc = { package = "solidfire-config", ... }`).
/// Inside the crate itself the path resolves through its `extern crate self` alias,
/// so the same tokens work from unit tests and integration tests.
fn crate_root() -> TokenStream {
    match crate_name("solidfire-config") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::solidfire_config },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions {
        name,
        skip_debug,
        skip_display,
    } = parse_container_options(&attrs)?;
    let type_name = name.unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));

    let output = match &data {
        Data::Struct(data) => derive_struct(data)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`RedactedFields` cannot be derived for enums",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`RedactedFields` cannot be derived for unions",
            ));
        }
    };

    let crate_root = crate_root();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let fields_body = &output.fields_body;
    let trace_flags_body = &output.trace_flags_body;

    let debug_impl = if skip_debug {
        quote! {}
    } else {
        quote! {
            impl #impl_generics ::core::fmt::Debug for #ident #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #crate_root::fmt_debug(self, f)
                }
            }
        }
    };

    let display_impl = if skip_display {
        quote! {}
    } else {
        quote! {
            impl #impl_generics ::core::fmt::Display for #ident #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #crate_root::fmt_display(self, f)
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics #crate_root::RedactedFields for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&self) -> ::std::vec::Vec<#crate_root::ConfigField<'_>> {
                #fields_body
            }

            fn trace_flags(&self) -> ::core::option::Option<&#crate_root::DebugTraceFlags> {
                #trace_flags_body
            }
        }

        #debug_impl

        #display_impl
    })
}
