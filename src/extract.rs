//! Signature extraction from parsed source files.
//!
//! Walks a `syn::File`, finds inherent impl blocks carrying the
//! `#[unwrapped(...)]` marker, and produces one [`UnwrappedImpl`] per marked
//! block. Recognition is purely structural: a method qualifies when its
//! return type's final path segment is `Either` with an angle-bracketed
//! argument list. Methods that do not match are skipped silently; methods
//! that match but cannot be reproduced faithfully (wrong arity, mismatched
//! failure type, unsupported receiver or parameter pattern) abort
//! extraction with a descriptive error.

use crate::core::{UnwrapFunction, UnwrapParameter, UnwrappedImpl};
use crate::errors::{Result, UnwrapGenError};
use quote::ToTokens;
use syn::{FnArg, GenericArgument, Ident, ImplItem, ImplItemFn, ItemImpl, Pat, ReturnType, Type};

/// Attribute name that marks an impl block for generation.
const MARKER: &str = "unwrapped";

/// Final path segment of the two-branch result type.
const EITHER: &str = "Either";

/// Extract every marked impl block from a parsed file, in declaration order.
pub fn extract_file(file: &syn::File) -> Result<Vec<UnwrappedImpl>> {
    let mut impls = Vec::new();
    for item in &file.items {
        if let syn::Item::Impl(item_impl) = item {
            if let Some(marked) = extract_impl(item_impl)? {
                impls.push(marked);
            }
        }
    }
    Ok(impls)
}

fn extract_impl(item: &ItemImpl) -> Result<Option<UnwrappedImpl>> {
    let Some(error_type) = marker_error_type(item)? else {
        return Ok(None);
    };

    if item.trait_.is_some() {
        return Err(UnwrapGenError::validation(
            "`#[unwrapped]` is only supported on inherent impl blocks",
        ));
    }

    let self_name = self_type_ident(&item.self_ty).ok_or_else(|| {
        UnwrapGenError::validation(format!(
            "`#[unwrapped]` requires a plain type name, found `{}`",
            item.self_ty.to_token_stream()
        ))
    })?;

    let mut functions = Vec::new();
    for impl_item in &item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        if let Some(function) = extract_method(&self_name, &error_type, method)? {
            functions.push(function);
        }
    }

    Ok(Some(UnwrappedImpl {
        self_name,
        error_type,
        functions,
    }))
}

/// Parse the declared error type out of the marker attribute.
///
/// `#[unwrapped(Some::Error)]` declares the type; bare `#[unwrapped]`
/// defaults to `String`. Returns `None` when the impl is unmarked.
fn marker_error_type(item: &ItemImpl) -> Result<Option<Type>> {
    for attr in &item.attrs {
        if !attr.path().is_ident(MARKER) {
            continue;
        }
        return match &attr.meta {
            syn::Meta::Path(_) => Ok(Some(syn::parse_quote!(String))),
            syn::Meta::List(list) => {
                let ty: Type = syn::parse2(list.tokens.clone()).map_err(|e| {
                    UnwrapGenError::validation(format!(
                        "malformed `#[unwrapped(...)]` value: {e}"
                    ))
                })?;
                Ok(Some(ty))
            }
            syn::Meta::NameValue(_) => Err(UnwrapGenError::validation(
                "`#[unwrapped]` takes a type argument, not a name-value pair",
            )),
        };
    }
    Ok(None)
}

fn extract_method(
    self_name: &Ident,
    error_type: &Type,
    method: &ImplItemFn,
) -> Result<Option<UnwrapFunction>> {
    let name = method.sig.ident.clone();

    let ReturnType::Type(_, return_type) = &method.sig.output else {
        log::debug!("{self_name}::{name}: no return type, skipped");
        return Ok(None);
    };
    let Some(type_args) = either_type_arguments(return_type) else {
        log::debug!("{self_name}::{name}: return type is not Either, skipped");
        return Ok(None);
    };

    if type_args.len() != 2 {
        return Err(UnwrapGenError::extraction(
            self_name.to_string(),
            name.to_string(),
            format!(
                "unsupported result arity: expected Either with exactly two type arguments, found {}",
                type_args.len()
            ),
        ));
    }
    let left = type_args[0].clone();
    let success = type_args[1].clone();

    if !types_match(&left, error_type) {
        return Err(UnwrapGenError::extraction(
            self_name.to_string(),
            name.to_string(),
            format!(
                "failure branch `{}` does not match the declared error type `{}`",
                left.to_token_stream(),
                error_type.to_token_stream()
            ),
        ));
    }

    check_receiver(self_name, &name, method)?;
    let params = extract_params(self_name, &name, method)?;

    log::info!(
        "{self_name}::{name}: Either<{}, {}>",
        left.to_token_stream(),
        success.to_token_stream()
    );

    Ok(Some(UnwrapFunction {
        left,
        success,
        name,
        params,
    }))
}

/// Return the angle-bracketed type arguments of an `Either` path type,
/// or `None` when the type has a different shape.
fn either_type_arguments(ty: &Type) -> Option<Vec<Type>> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != EITHER {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    Some(
        args.args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty.clone()),
                _ => None,
            })
            .collect(),
    )
}

/// Token-level equality; both sides are structural `syn::Type`s so this is
/// insensitive to whitespace in the source.
fn types_match(a: &Type, b: &Type) -> bool {
    a.to_token_stream().to_string() == b.to_token_stream().to_string()
}

fn check_receiver(self_name: &Ident, name: &Ident, method: &ImplItemFn) -> Result<()> {
    let Some(receiver) = method.sig.receiver() else {
        return Err(UnwrapGenError::extraction(
            self_name.to_string(),
            name.to_string(),
            "Either-returning associated functions are not supported; a `&self` receiver is required",
        ));
    };
    if receiver.reference.is_none() || receiver.mutability.is_some() {
        return Err(UnwrapGenError::extraction(
            self_name.to_string(),
            name.to_string(),
            "only `&self` receivers are supported",
        ));
    }
    Ok(())
}

fn extract_params(
    self_name: &Ident,
    name: &Ident,
    method: &ImplItemFn,
) -> Result<Vec<UnwrapParameter>> {
    let mut params = Vec::new();
    for input in &method.sig.inputs {
        let FnArg::Typed(pat_type) = input else {
            continue;
        };
        let Pat::Ident(pat_ident) = &*pat_type.pat else {
            return Err(UnwrapGenError::extraction(
                self_name.to_string(),
                name.to_string(),
                "destructuring parameters are not supported",
            ));
        };
        params.push(UnwrapParameter {
            name: pat_ident.ident.clone(),
            ty: (*pat_type.ty).clone(),
        });
    }
    Ok(params)
}

fn self_type_ident(ty: &Type) -> Option<Ident> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() || type_path.path.segments.len() != 1 {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if !segment.arguments.is_empty() {
        return None;
    }
    Some(segment.ident.clone())
}
