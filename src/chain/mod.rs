//! # Layer 2: Chain
//!
//! Compile-time description of the subtype chain a list is viewed through.
//!
//! - `node.rs`: `Cons` / `Last` nodes and the `TypeChain` trait.
//! - `at.rs`: Level lookup (`At<L>`).
//! - `aliases.rs`: `chain!` and the `Chain2`..`Chain5` aliases.

pub mod aliases;
pub mod at;
pub mod node;

pub use aliases::*;
pub use at::{At, ItemAt};
pub use node::{Cons, Last, TypeChain};

/// Fewest levels a list can be viewed through.
pub const MIN_DEPTH: usize = 2;

/// Most levels a list can be viewed through.
pub const MAX_DEPTH: usize = 5;
