//! Fail-fast enumeration.

use core::iter::FusedIterator;

use super::sequence::Sequence;
use crate::error::{Error, Result};

/// Enumerator over a [`Sequence`] that refuses to continue after the
/// sequence is modified.
///
/// The version observed at creation is compared on every advance,
/// including the one that would report the end. A mismatch yields one
/// `Err(ConcurrentModification)` and then the iterator is exhausted.
/// Modifying the sequence after enumeration finished is not an error.
///
/// The store is only borrowed inside [`next`](Iterator::next), so the loop
/// body may freely read or write the sequence.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    sequence: &'a Sequence<T>,
    index: usize,
    version: u64,
    finished: bool,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(sequence: &'a Sequence<T>) -> Self {
        Self {
            version: sequence.version(),
            sequence,
            index: 0,
            finished: false,
        }
    }
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let store = self.sequence.store.borrow();
        if store.version != self.version {
            self.finished = true;
            tracing::trace!(
                expected = self.version,
                found = store.version,
                position = self.index,
                "enumeration invalidated by a modification"
            );
            return Some(Err(Error::ConcurrentModification));
        }
        match store.items.get(self.index) {
            Some(item) => {
                self.index += 1;
                Some(Ok(item.clone()))
            }
            None => {
                self.finished = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self.sequence.len().saturating_sub(self.index);
        // One more item if the next advance reports a modification.
        (0, Some(remaining + 1))
    }
}

impl<T: Clone> FusedIterator for Iter<'_, T> {}
