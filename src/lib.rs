#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std for thiserror and tracing
// - without std the crate needs only alloc

//! # tola-covariant
//!
//! One list of concrete values, usable as a list of any of their ancestors.
//!
//! **Covariant list views over a type-level subtype chain.**
//!
//! ## Architecture
//!
//! A list stores `Rc<Tn>` values of one concrete *bottom* type `Tn`. A
//! *chain* names the ancestors the bottom type can be seen as, most
//! general first, and every level of the chain is a full list over the same
//! storage:
//!
//! ```text
//! chain![dyn Animal, dyn Dog, Labrador]
//!
//!   top()          view::<L2>()      bottom()
//!   Rc<dyn Animal> Rc<dyn Dog>       Rc<Labrador>
//!        │              │                 │
//!        └──────────────┼─────────────────┘
//!                       ▼
//!          Rc<RefCell<Vec<Rc<Labrador>>>>
//! ```
//!
//! Reads are always safe: every stored value is a `Labrador`, hence a
//! `Dog` and an `Animal`. Writes through an ancestor level are checked at
//! runtime and rejected with [`Error::TypeMismatch`] unless the value is a
//! `Labrador`.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Level markers (Z, S, L1-L5), Object, IsA / Ancestor            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Store                                                   |
//! |  - Sequence (shared handle), fail-fast Iter, bounds               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Chain                                                   |
//! |  - Cons / Last, TypeChain, At<L>, chain!, Chain2-Chain5           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3-4: User API                                              |
//! |  - View, ListView, ReadOnly, CovariantList, wrap / unwrap         |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_covariant::prelude::*;
//!
//! trait Animal: Object { fn name(&self) -> &str; }
//! trait Dog: Animal {}
//!
//! #[derive(Subtype)]
//! #[is_a(dyn Animal, dyn Dog)]
//! struct Labrador { name: String }
//!
//! let pets: CovariantList3<dyn Animal, dyn Dog, Labrador> = CovariantList::new();
//! pets.bottom().add(Rc::new(Labrador { name: "Rex".into() }))?;
//!
//! let animals = pets.top();
//! assert_eq!(animals.get(0)?.name(), "Rex");
//! ```

// Allow `::tola_covariant` to work inside the crate itself
extern crate self as tola_covariant;

extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Store
// =============================================================================
pub mod error;
pub mod store;

// =============================================================================
// Layer 2: Chain
// =============================================================================
pub mod chain;

// =============================================================================
// Layer 3: Views and the list
// =============================================================================
pub mod list;
pub mod view;

// =============================================================================
// Layer 4: Conversions
// =============================================================================
pub mod convert;

// Syntax macros (is_a!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use chain::{
    At, Chain2, Chain3, Chain4, Chain5, Cons, CovariantList2, CovariantList3, CovariantList4,
    CovariantList5, ItemAt, Last, MAX_DEPTH, MIN_DEPTH, TypeChain,
};
pub use error::{Error, Result};
pub use list::{CovariantList, ListAt};
pub use primitives::{Ancestor, IsA, L1, L2, L3, L4, L5, Level, Object, S, Z};
pub use store::{Iter, Sequence};
pub use view::{ListView, ReadOnly, View, ViewIter};

// Re-export proc-macros
pub use macros::Subtype;

/// Paths used by generated code. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use alloc::rc::Rc;
}

/// Common items for building and using covariant lists.
pub mod prelude {
    pub use crate::chain::{Chain2, Chain3, Chain4, Chain5, TypeChain};
    pub use crate::chain::{CovariantList2, CovariantList3, CovariantList4, CovariantList5};
    pub use crate::list::{CovariantList, ListAt};
    pub use crate::primitives::{IsA, L1, L2, L3, L4, L5, Object};
    pub use crate::store::Sequence;
    pub use crate::view::{ListView, View};
    pub use crate::{Error, Result};
    pub use alloc::rc::Rc;
    pub use macros::Subtype;
    // Note: chain! and is_a! are #[macro_export] so they're at crate root
}
