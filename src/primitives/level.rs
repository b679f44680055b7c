//! Type-level level markers.
//!
//! Levels are Peano numbers counted from the top of a chain: `L1 = Z` selects
//! the most general type, `L2 = S<L1>` the one below it, and so on down to
//! the bottom type.

use core::marker::PhantomData;

// =============================================================================
// Peano Levels
// =============================================================================

/// Type-level level index.
pub trait Level: 'static {
    /// Zero-based position, counted from the top of the chain.
    const INDEX: usize;

    /// One-based level number, as reported in diagnostics.
    const NUMBER: usize = Self::INDEX + 1;
}

/// Zero (the top level).
#[derive(Debug)]
pub struct Z;
impl Level for Z {
    const INDEX: usize = 0;
}

/// Successor (S<N> = N + 1)
#[derive(Debug)]
pub struct S<N>(PhantomData<N>);
impl<N: Level> Level for S<N> {
    const INDEX: usize = N::INDEX + 1;
}

// Generate L1..L5 using proc-macro
macros::levels!(5);
