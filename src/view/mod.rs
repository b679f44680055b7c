//! # Layer 3: Views
//!
//! Every level of a list is a [`View`] over the same store:
//!
//! ```text
//!   View<C, L1> (dyn Animal) ─┐
//!   View<C, L2> (dyn Dog)    ─┼──► Sequence<Rc<Labrador>>
//!   View<C, L3> (Labrador)   ─┘
//! ```
//!
//! - `ancestor.rs`: The generic view and its fail-fast iterator.
//! - `contract.rs`: `ListView`, the per-level list trait.
//! - `read_only.rs`: Read-only façade.

pub mod ancestor;
pub mod contract;
pub mod read_only;

pub use ancestor::{View, ViewIter};
pub use contract::ListView;
pub use read_only::ReadOnly;
