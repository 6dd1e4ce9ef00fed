//! Immutable signature descriptors produced by extraction.
//!
//! These types carry structural `syn` nodes rather than printed text, so
//! nested generics survive intact. They are built once per generation pass
//! and consumed read-only by the emitter.

use syn::{Ident, Type};

/// A single method parameter: its binding name and type.
#[derive(Debug, Clone, PartialEq)]
pub struct UnwrapParameter {
    pub name: Ident,
    pub ty: Type,
}

/// One extracted method: its failure-branch type, success-branch type,
/// name, and ordered parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct UnwrapFunction {
    /// First generic argument of the `Either` return type.
    pub left: Type,
    /// Second generic argument of the `Either` return type.
    pub success: Type,
    pub name: Ident,
    pub params: Vec<UnwrapParameter>,
}

/// A marked impl block: the self type, its declared error type, and the
/// qualifying methods in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct UnwrappedImpl {
    pub self_name: Ident,
    pub error_type: Type,
    pub functions: Vec<UnwrapFunction>,
}

impl UnwrappedImpl {
    /// Name of the generated wrapper type.
    pub fn wrapper_name(&self) -> Ident {
        quote::format_ident!("{}Unwrapped", self.self_name)
    }

    /// Name of the generated error-carrier type.
    pub fn error_name(&self) -> Ident {
        quote::format_ident!("{}UnwrappedError", self.self_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn generated_names_derive_from_self_type() {
        let marked = UnwrappedImpl {
            self_name: parse_quote!(ServiceOne),
            error_type: parse_quote!(ServiceOneError),
            functions: vec![],
        };
        assert_eq!(marked.wrapper_name(), "ServiceOneUnwrapped");
        assert_eq!(marked.error_name(), "ServiceOneUnwrappedError");
    }
}
