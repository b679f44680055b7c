//! Bounds checks shared by all index- and range-based operations.

use core::ops::Range;

use crate::error::{Error, Result};

/// Readable/removable index: `[0, len)`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Insertion point: `[0, len]`.
#[inline]
pub(crate) fn check_insert(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Forward range `[index, index + count)`.
#[inline]
pub(crate) fn check_range(index: usize, count: usize, len: usize) -> Result<Range<usize>> {
    match index.checked_add(count) {
        Some(end) if end <= len => Ok(index..end),
        _ => Err(Error::RangeOutOfBounds { index, count, len }),
    }
}

/// Backward range of `count` elements ending at `start` (inclusive):
/// `[start + 1 - count, start]`.
///
/// Callers handle the empty sequence before calling.
#[inline]
pub(crate) fn check_backward(start: usize, count: usize, len: usize) -> Result<Range<usize>> {
    check_index(start, len)?;
    let end = start + 1;
    if count > end {
        return Err(Error::RangeOutOfBounds { index: start, count, len });
    }
    Ok(end - count..end)
}

/// Destination slice must hold `required` slots starting at `offset`.
#[inline]
pub(crate) fn check_buffer(required: usize, offset: usize, capacity: usize) -> Result<Range<usize>> {
    let available = capacity.saturating_sub(offset);
    if offset > capacity || available < required {
        return Err(Error::BufferTooSmall { required, available });
    }
    Ok(offset..offset + required)
}
