//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Subtype)]` | on struct/enum | Declare `IsA` ancestors |

mod subtype;

pub use subtype::expand_derive_subtype;
