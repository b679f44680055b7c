//! Level lookup: `<C as At<L>>::Item` is the type at level `L` of chain `C`.
//!
//! The lookup recurses through the cons list, peeling one `S` per `Cons`:
//!
//! ```text
//! At<S<S<Z>>> for Cons<A, Cons<B, Last<C>>>
//!   => At<S<Z>> for Cons<B, Last<C>>
//!   => At<Z>    for Last<C>            => C
//! ```
//!
//! Every level's type is bounded by `Ancestor<Bottom>`, so a chain whose
//! bottom does not implement `IsA` for some level has no `At` impl there.

use super::node::{Cons, Last, TypeChain};
use crate::primitives::{Ancestor, IsA, Level, Object, S, Z};

/// Chain `Self` has a level `L`.
#[diagnostic::on_unimplemented(
    message = "chain `{Self}` has no level `{L}`",
    label = "level out of range, or the bottom type is not declared `IsA` this level",
    note = "Levels count from the top: `L1` is the first type of the chain, `Ln` the bottom."
)]
pub trait At<L: Level>: TypeChain {
    /// The pointee type of elements seen at this level.
    type Item: ?Sized + Ancestor<Self::Bottom>;
}

impl<H, T> At<Z> for Cons<H, T>
where
    H: ?Sized + 'static,
    T: TypeChain,
    T::Bottom: IsA<H>,
{
    type Item = H;
}

impl<H, T, N> At<S<N>> for Cons<H, T>
where
    H: ?Sized + 'static,
    N: Level,
    T: At<N>,
{
    type Item = <T as At<N>>::Item;
}

impl<B: Object> At<Z> for Last<B> {
    type Item = B;
}

/// Pointee type of level `L` in chain `C`.
pub type ItemAt<C, L> = <C as At<L>>::Item;
