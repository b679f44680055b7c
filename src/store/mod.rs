//! # Layer 1: Store
//!
//! Physical storage shared by every list, view and raw handle.
//!
//! ```text
//! Sequence<T> ──┐
//! Sequence<T> ──┼──► Rc<RefCell<Store { items: Vec<T>, version }>>
//! View<'_>    ──┘
//! ```
//!
//! - `sequence.rs`: The aliased handle and every element operation.
//! - `iter.rs`: Fail-fast enumeration keyed on the store's version.
//! - `bounds.rs`: Index and range validation.

pub(crate) mod bounds;
pub mod iter;
pub mod sequence;

pub use iter::Iter;
pub use sequence::Sequence;
