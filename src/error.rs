//! Error types for covariant list operations.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by sequence and view operations.
///
/// Every variant is reported at the point of violation; nothing is retried
/// or corrected. Lookups (`contains`, `index_of`, `remove`) never produce
/// [`Error::TypeMismatch`]: a probe of the wrong type is simply absent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A backing sequence was required but none was given.
    #[error("argument `{argument}` must not be absent")]
    AbsentArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// An index fell outside the valid range for the operation.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// An `(index, count)` range reached past the end of the sequence.
    #[error("range of {count} elements at index {index} exceeds a sequence of length {len}")]
    RangeOutOfBounds {
        /// First index of the range.
        index: usize,
        /// Number of elements in the range.
        count: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// A copy-out destination cannot hold the requested elements.
    #[error("destination buffer too small: {required} slots required, {available} available")]
    BufferTooSmall {
        /// Slots needed from the given offset.
        required: usize,
        /// Slots available from the given offset.
        available: usize,
    },

    /// A value written through an ancestor view is not a bottom-type instance.
    #[error("value written at level {level} is not an instance of `{expected}`")]
    TypeMismatch {
        /// Name of the bottom type every stored element must have.
        expected: &'static str,
        /// One-based level of the view the write went through.
        level: usize,
    },

    /// The sequence changed while an enumeration was in progress.
    #[error("sequence was modified during enumeration")]
    ConcurrentModification,
}
