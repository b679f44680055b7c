use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput};

use crate::common::collect_ancestors;

/// #[derive(Subtype)] generates one `IsA` impl per listed ancestor.
///
/// Upcasts are plain unsizing coercions; `downcast` goes through the
/// runtime type identification of the ancestor's `Object` supertrait.
pub fn expand_derive_subtype(input: DeriveInput) -> TokenStream2 {
    if let Data::Union(data) = &input.data {
        return syn::Error::new(
            data.union_token.span,
            "`Subtype` cannot be derived for unions",
        )
        .to_compile_error();
    }

    let ancestors = match collect_ancestors(&input.attrs) {
        Ok(ancestors) => ancestors,
        Err(err) => return err.to_compile_error(),
    };
    if ancestors.is_empty() {
        return syn::Error::new_spanned(
            &input.ident,
            "`#[derive(Subtype)]` requires `#[is_a(..)]` naming at least one ancestor",
        )
        .to_compile_error();
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let impls = ancestors.iter().map(|ancestor| {
        quote! {
            #[allow(unused_parens)]
            impl #impl_generics ::tola_covariant::primitives::IsA<#ancestor>
                for #ident #ty_generics #where_clause
            {
                #[inline]
                fn upcast(
                    this: ::tola_covariant::__private::Rc<Self>,
                ) -> ::tola_covariant::__private::Rc<#ancestor> {
                    this
                }

                #[inline]
                fn upcast_ref(&self) -> &(#ancestor) {
                    self
                }

                #[inline]
                fn downcast(
                    value: &::tola_covariant::__private::Rc<#ancestor>,
                ) -> ::core::option::Option<::tola_covariant::__private::Rc<Self>> {
                    ::tola_covariant::primitives::object::downcast_rc::<#ancestor, Self>(value)
                }
            }
        }
    });

    quote! { #(#impls)* }
}
