//! Procedural macros for tola-covariant
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Subtype)]` | struct/enum | Declare ancestors with `#[is_a(..)]` |
//! | `levels!(n)` | - | Generate level markers `L1..Ln` (internal) |
//!
//! ## Example
//!
//! ```ignore
//! trait Animal: Object { fn name(&self) -> &str; }
//! trait Dog: Animal {}
//!
//! #[derive(Subtype)]
//! #[is_a(dyn Animal, dyn Dog)]
//! struct Labrador { name: String }
//!
//! // Labrador: IsA<dyn Animal> + IsA<dyn Dog> (and IsA<Labrador>)
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate level marker aliases L1..Ln over the crate's Peano numbers.
///
/// # Usage
/// ```ignore
/// levels!(5);  // Generates L1 = Z, L2 = S<L1>, ..., L5 = S<L4>
/// ```
#[proc_macro]
pub fn levels(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::levels::LevelsInput);
    inner::levels::expand_levels(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Derive `IsA` relations for a concrete type.
///
/// Each type listed in `#[is_a(..)]` becomes an ancestor the type can be
/// viewed as. The attribute may be repeated.
///
/// # Usage
/// ```ignore
/// #[derive(Subtype)]
/// #[is_a(dyn Animal, dyn Dog)]
/// struct Labrador { name: String }
/// ```
///
/// The type must implement every listed trait, and every listed trait must
/// have `Object` as a (transitive) supertrait.
#[proc_macro_derive(Subtype, attributes(is_a))]
pub fn derive_subtype(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_subtype(input).into()
}
