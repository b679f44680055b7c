//! # Layer 0: Primitives
//!
//! Basic building blocks for covariant lists:
//! - `level.rs`: Type-level level markers (Z, S, L1-L5).
//! - `object.rs`: Runtime identification of values behind ancestor handles.
//! - `is_a.rs`: The subtype relation (`IsA`) and its mirror (`Ancestor`).

pub mod is_a;
pub mod level;
pub mod object;

// Re-export key types at this level
pub use is_a::{Ancestor, IsA};
pub use level::{L1, L2, L3, L4, L5, Level, S, Z};
pub use object::{Object, downcast_rc};
