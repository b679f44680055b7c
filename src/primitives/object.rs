//! Runtime identification of ancestor-typed values.
//!
//! Ancestor traits declare `Object` as a supertrait so that a value seen
//! through `Rc<dyn Ancestor>` can still be asked what it really is:
//!
//! ```ignore
//! trait Animal: Object {
//!     fn name(&self) -> &str;
//! }
//! ```

use alloc::rc::Rc;
use core::any::Any;

/// Supertrait for ancestor traits whose values are identified at runtime.
///
/// Blanket-implemented for every `'static` type; never implement it by hand.
pub trait Object: Any {
    /// Borrow the value as `dyn Any` (dynamic type, not the handle type).
    fn as_any(&self) -> &dyn Any;

    /// Convert a shared handle into a `dyn Any` handle to the same allocation.
    fn into_any(self: Rc<Self>) -> Rc<dyn Any>;

    /// Name of the concrete type behind the reference.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> Object for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

/// Recover an `Rc<B>` from an ancestor handle if the value really is a `B`.
///
/// The returned handle points at the same allocation as `value`.
pub fn downcast_rc<A, B>(value: &Rc<A>) -> Option<Rc<B>>
where
    A: ?Sized + Object,
    B: Any,
{
    // Check through a reference first so a mismatch costs no refcount traffic.
    if !<A as Object>::as_any(&**value).is::<B>() {
        return None;
    }
    <A as Object>::into_any(Rc::clone(value)).downcast::<B>().ok()
}
