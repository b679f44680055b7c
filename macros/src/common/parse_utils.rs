//! Common parsing utilities
//!
//! Shared parsing helpers for the derive attributes.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Token, Type,
};

// =============================================================================
// Ancestor List Parsing: `#[is_a(A, B, ..)]`
// =============================================================================

/// Comma-separated ancestor types inside one `#[is_a(..)]`.
pub struct AncestorList {
    pub types: Vec<Type>,
}

impl Parse for AncestorList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let types = Punctuated::<Type, Token![,]>::parse_terminated(input)?;
        Ok(AncestorList {
            types: types.into_iter().collect(),
        })
    }
}

/// Collect the ancestors named by every `#[is_a(..)]` attribute, in order.
pub fn collect_ancestors(attrs: &[Attribute]) -> syn::Result<Vec<Type>> {
    let mut ancestors = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("is_a")) {
        let list: AncestorList = attr.parse_args()?;
        if list.types.is_empty() {
            return Err(syn::Error::new_spanned(
                attr,
                "`#[is_a(..)]` needs at least one ancestor type",
            ));
        }
        ancestors.extend(list.types);
    }
    Ok(ancestors)
}
