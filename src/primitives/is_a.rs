//! The subtype relation between a bottom type and its ancestors.
//!
//! `B: IsA<A>` reads "every `B` can be seen as an `A`". Every type is
//! reflexively `IsA<Self>`; other relations come from `#[derive(Subtype)]`
//! or the [`is_a!`](crate::is_a) macro.
//!
//! ```text
//!   Rc<Labrador> ──upcast──▶ Rc<dyn Dog> ──upcast──▶ Rc<dyn Animal>
//!        ▲                        │                         │
//!        └──────downcast──────────┴────────downcast─────────┘
//!                  (runtime check, may fail)
//! ```

use alloc::rc::Rc;

// =============================================================================
// IsA (declared on the subtype)
// =============================================================================

/// `Self` is a subtype of `A`.
///
/// Upcasts are infallible and keep the allocation; `downcast` is the
/// write-side variance check: it answers whether an `A`-typed handle really
/// holds a `Self`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not declared as a subtype of `{A}`",
    label = "missing `IsA<{A}>` relation",
    note = "Add `#[derive(Subtype)]` with `#[is_a({A})]`, or use `is_a!({Self}: {A})`."
)]
pub trait IsA<A: ?Sized> {
    /// Widen a shared handle; the result points at the same allocation.
    fn upcast(this: Rc<Self>) -> Rc<A>;

    /// Widen a reference.
    fn upcast_ref(&self) -> &A;

    /// Narrow an ancestor handle if it actually holds a `Self`.
    fn downcast(value: &Rc<A>) -> Option<Rc<Self>>;
}

impl<T: ?Sized> IsA<T> for T {
    #[inline]
    fn upcast(this: Rc<Self>) -> Rc<T> {
        this
    }

    #[inline]
    fn upcast_ref(&self) -> &T {
        self
    }

    #[inline]
    fn downcast(value: &Rc<T>) -> Option<Rc<Self>> {
        Some(Rc::clone(value))
    }
}

// =============================================================================
// Ancestor (the same relation, seen from the supertype)
// =============================================================================

/// `Self` is an ancestor of `B`. Implemented automatically for every
/// `B: IsA<Self>`; chains use it as a bound on their level types.
pub trait Ancestor<B: ?Sized> {
    fn widen(value: Rc<B>) -> Rc<Self>;
    fn widen_ref(value: &B) -> &Self;
    fn narrow(value: &Rc<Self>) -> Option<Rc<B>>;
}

impl<A: ?Sized, B: ?Sized + IsA<A>> Ancestor<B> for A {
    #[inline]
    fn widen(value: Rc<B>) -> Rc<A> {
        <B as IsA<A>>::upcast(value)
    }

    #[inline]
    fn widen_ref(value: &B) -> &A {
        <B as IsA<A>>::upcast_ref(value)
    }

    #[inline]
    fn narrow(value: &Rc<A>) -> Option<Rc<B>> {
        <B as IsA<A>>::downcast(value)
    }
}
