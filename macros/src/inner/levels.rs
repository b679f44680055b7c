//! Level marker generation macro.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

pub struct LevelsInput {
    pub max: usize,
    span: Span,
}

impl Parse for LevelsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(LevelsInput {
            max,
            span: lit.span(),
        })
    }
}

pub fn expand_levels(input: LevelsInput) -> TokenStream {
    if input.max == 0 {
        return syn::Error::new(input.span, "at least one level is required").to_compile_error();
    }

    // L1 = Z (the top of every chain)
    let mut types = vec![quote! {
        #[doc = "Level 1: the most general type of a chain."]
        pub type L1 = Z;
    }];

    // L2..Lmax = S<L(n-1)>
    for n in 2..=input.max {
        let curr = Ident::new(&format!("L{}", n), Span::call_site());
        let prev = Ident::new(&format!("L{}", n - 1), Span::call_site());
        let doc = format!("Level {}.", n);
        types.push(quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        });
    }

    quote! { #(#types)* }
}
