//! Rendering of generated source artifacts.
//!
//! Items are built structurally with `quote!`, assembled into a `syn::File`,
//! and pretty-printed with `prettyplease`, so output is syntactically valid
//! and byte-identical for identical input. No semantic checking happens
//! here; a signature that passed extraction renders as-is and any type
//! error surfaces when the generated code is compiled.

use crate::core::{UnwrapFunction, UnwrappedImpl};
use crate::errors::{Result, UnwrapGenError};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

/// Header prepended to every generated file.
const HEADER: &str = "// @generated by unwrapgen. Any edits will be lost on the next run.";

/// One rendered artifact: its output file name and full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub file_name: String,
    pub content: String,
}

/// Render both artifacts for a marked impl, error carrier first: the
/// wrapper references the carrier by name.
///
/// `stem` is the file stem of the originating module; generated files are
/// its siblings and import it via `super::`.
pub fn render_artifacts(marked: &UnwrappedImpl, stem: &str) -> Result<Vec<RenderedArtifact>> {
    let stem_ident = module_ident(stem)?;
    Ok(vec![
        render_error_artifact(marked, stem, &stem_ident)?,
        render_wrapper_artifact(marked, stem, &stem_ident)?,
    ])
}

fn render_error_artifact(
    marked: &UnwrappedImpl,
    stem: &str,
    stem_ident: &Ident,
) -> Result<RenderedArtifact> {
    let error_name = marked.error_name();
    let error_type = &marked.error_type;

    let items = quote! {
        #[allow(unused_imports)]
        use super::#stem_ident::*;

        /// Carrier for the failure branch of an unwrapped call.
        #[derive(Debug)]
        pub struct #error_name {
            pub left: #error_type,
        }

        impl #error_name {
            pub fn new(left: #error_type) -> Self {
                Self { left }
            }
        }

        impl ::std::fmt::Display for #error_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "unwrapped call failed: {:?}", self.left)
            }
        }

        impl ::std::error::Error for #error_name {}
    };

    Ok(RenderedArtifact {
        file_name: format!("{stem}_unwrapped_error.rs"),
        content: render_file(items)?,
    })
}

fn render_wrapper_artifact(
    marked: &UnwrappedImpl,
    stem: &str,
    stem_ident: &Ident,
) -> Result<RenderedArtifact> {
    let wrapper_name = marked.wrapper_name();
    let error_name = marked.error_name();
    let error_module = format_ident!("{stem}_unwrapped_error");
    let self_name = &marked.self_name;
    let error_type = &marked.error_type;
    let methods = marked
        .functions
        .iter()
        .map(|function| render_unwrap_method(function, &error_name));

    let items = quote! {
        use either::Either;
        #[allow(unused_imports)]
        use super::#stem_ident::*;
        use super::#error_module::#error_name;

        /// Wrapper exposing the underlying methods with the failure branch
        /// converted into an error carrier, plus a bridge back to `Either`.
        pub struct #wrapper_name {
            object: #self_name,
        }

        impl #wrapper_name {
            pub fn new(object: #self_name) -> Self {
                Self { object }
            }

            #(#methods)*

            /// Run a caller-supplied transform written against the unwrapped
            /// methods, converting a propagated carrier back into the
            /// two-branch form at this boundary.
            pub fn execute<T, R>(
                &self,
                arg: T,
                apply: impl FnOnce(&Self, T) -> Result<R, #error_name>,
            ) -> Either<#error_type, R> {
                match apply(self, arg) {
                    Ok(value) => Either::Right(value),
                    Err(err) => Either::Left(err.left),
                }
            }
        }
    };

    Ok(RenderedArtifact {
        file_name: format!("{stem}_unwrapped.rs"),
        content: render_file(items)?,
    })
}

fn render_unwrap_method(function: &UnwrapFunction, error_name: &Ident) -> TokenStream {
    let name = &function.name;
    let success = &function.success;
    let params = function.params.iter().map(|p| {
        let param_name = &p.name;
        let param_type = &p.ty;
        quote!(#param_name: #param_type)
    });
    let args = function.params.iter().map(|p| &p.name);

    quote! {
        pub fn #name(&self, #(#params),*) -> Result<#success, #error_name> {
            self.object
                .#name(#(#args),*)
                .either(|left| Err(#error_name::new(left)), Ok)
        }
    }
}

fn render_file(items: TokenStream) -> Result<String> {
    let file: syn::File = syn::parse2(items)
        .map_err(|e| UnwrapGenError::Render(format!("generated items failed to parse: {e}")))?;
    Ok(format!("{HEADER}\n{}", prettyplease::unparse(&file)))
}

fn module_ident(stem: &str) -> Result<Ident> {
    syn::parse_str(stem).map_err(|_| {
        UnwrapGenError::Render(format!(
            "file stem `{stem}` is not a valid module name"
        ))
    })
}
