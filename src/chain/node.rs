//! Type-level chain nodes.
//!
//! A chain is a cons list of pointee types, most general first:
//!
//! ```text
//! chain![dyn Animal, dyn Dog, Labrador]
//!   = Cons<dyn Animal, Cons<dyn Dog, Last<Labrador>>>
//!                                    └──── bottom ────┘
//! ```
//!
//! Chains are assembled bottom level first: `Last<Tn>` is a complete
//! one-level chain and every `Cons` adds one ancestor above it.

use core::marker::PhantomData;

use crate::primitives::{Level, Object, S, Z};

/// One ancestor level `H` above the chain `T`.
///
/// Never instantiated; only used as a type.
pub struct Cons<H: ?Sized, T>(PhantomData<T>, PhantomData<H>);

/// The bottom level: the one concrete type actually stored.
pub struct Last<B>(PhantomData<B>);

/// A well-formed type chain.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type chain",
    label = "expected `chain![T1, .., Tn]`",
    note = "Build chains with `chain![..]` or the `Chain2`..`Chain5` aliases; the last type must be a concrete `'static` type."
)]
pub trait TypeChain: 'static {
    /// The concrete element type (Tn).
    type Bottom: Object;

    /// Level marker selecting the bottom type.
    type BottomLevel: Level;

    /// Number of levels in the chain.
    const DEPTH: usize;
}

impl<H: ?Sized + 'static, T: TypeChain> TypeChain for Cons<H, T> {
    type Bottom = T::Bottom;
    type BottomLevel = S<T::BottomLevel>;
    const DEPTH: usize = T::DEPTH + 1;
}

impl<B: Object> TypeChain for Last<B> {
    type Bottom = B;
    type BottomLevel = Z;
    const DEPTH: usize = 1;
}
