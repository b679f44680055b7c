//! The raw backing sequence.
//!
//! A [`Sequence`] is a shared handle to one [`Store`]: cloning the handle
//! creates another *alias* of the same elements, never a copy. Every
//! operation takes `&self`; the store is mutated through interior
//! mutability and carries a version counter for fail-fast enumeration.
//!
//! # Callbacks
//!
//! Predicates and mappers run while the store is borrowed for reading, so
//! they may read the sequence but must not mutate it. Comparators (and the
//! `remove_all` predicate) run while it is borrowed for writing and must not
//! touch it at all. Either mistake panics with a `RefCell` borrow error.
//! [`Sequence::for_each`] is the exception: its action runs between borrows
//! and a mutation is reported as
//! [`ConcurrentModification`](crate::Error::ConcurrentModification).

use alloc::{rc::Rc, vec::Vec};
use core::cell::{Ref, RefCell, RefMut};
use core::cmp::Ordering;
use core::fmt;

use super::bounds::{check_backward, check_buffer, check_index, check_insert, check_range};
use super::iter::Iter;
use crate::error::Result;

// =============================================================================
// Store
// =============================================================================

/// Physical storage: the elements plus a modification counter.
pub(crate) struct Store<T> {
    pub(super) items: Vec<T>,
    pub(super) version: u64,
}

impl<T> Store<T> {
    /// Record a modification. Must be called by every mutating operation.
    #[inline]
    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

// =============================================================================
// Sequence
// =============================================================================

/// Ordered, index-addressable, growable sequence shared between aliases.
///
/// Single-threaded: the handle is neither `Send` nor `Sync`. Callers that
/// need cross-thread access must provide their own exclusion around a
/// different container.
pub struct Sequence<T> {
    pub(super) store: Rc<RefCell<Store<T>>>,
}

impl<T> Sequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Take ownership of `items` as the sequence's storage.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            store: Rc::new(RefCell::new(Store { items, version: 0 })),
        }
    }

    /// Whether both handles are aliases of the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    /// Number of live handles to this store.
    pub fn alias_count(&self) -> usize {
        Rc::strong_count(&self.store)
    }

    #[inline]
    fn store(&self) -> Ref<'_, Store<T>> {
        self.store.borrow()
    }

    #[inline]
    fn store_mut(&self) -> RefMut<'_, Store<T>> {
        self.store.borrow_mut()
    }

    #[inline]
    pub(crate) fn version(&self) -> u64 {
        self.store().version
    }

    /// Run `f` over the current elements.
    #[inline]
    pub(crate) fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.store().items)
    }

    // -------------------------------------------------------------------------
    // Size and capacity
    // -------------------------------------------------------------------------

    /// Number of elements.
    #[doc(alias = "count")]
    pub fn len(&self) -> usize {
        self.store().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated slots. Informational only.
    pub fn capacity(&self) -> usize {
        self.store().items.capacity()
    }

    /// Release unused capacity when less than 90% of it is occupied.
    ///
    /// A hint: the allocator may keep more than `len` slots.
    pub fn trim_excess(&self) {
        let mut store = self.store_mut();
        let len = store.items.len();
        let capacity = store.items.capacity();
        if len.saturating_mul(10) < capacity.saturating_mul(9) {
            store.items.shrink_to_fit();
            tracing::trace!(len, capacity, "released excess sequence capacity");
        }
    }

    // -------------------------------------------------------------------------
    // Single-element mutation
    // -------------------------------------------------------------------------

    /// Append an element. Amortized O(1).
    #[doc(alias = "push")]
    pub fn add(&self, item: T) {
        let mut store = self.store_mut();
        store.touch();
        store.items.push(item);
    }

    /// Insert at `index` in `[0, len]`, shifting later elements.
    pub fn insert(&self, index: usize, item: T) -> Result<()> {
        let mut store = self.store_mut();
        check_insert(index, store.items.len())?;
        store.touch();
        store.items.insert(index, item);
        Ok(())
    }

    /// Replace the element at `index` in `[0, len)`.
    pub fn set(&self, index: usize, item: T) -> Result<()> {
        let mut store = self.store_mut();
        check_index(index, store.items.len())?;
        store.touch();
        store.items[index] = item;
        Ok(())
    }

    /// Remove and return the element at `index` in `[0, len)`.
    pub fn remove_at(&self, index: usize) -> Result<T> {
        let mut store = self.store_mut();
        check_index(index, store.items.len())?;
        store.touch();
        Ok(store.items.remove(index))
    }

    /// Remove every element.
    pub fn clear(&self) {
        let mut store = self.store_mut();
        store.touch();
        store.items.clear();
    }

    // -------------------------------------------------------------------------
    // Bulk mutation
    // -------------------------------------------------------------------------

    /// Append every element of `items`, in order.
    ///
    /// The input is drained before the store is borrowed, so it may itself
    /// read this sequence.
    pub fn add_range(&self, items: impl IntoIterator<Item = T>) {
        let batch: Vec<T> = items.into_iter().collect();
        let mut store = self.store_mut();
        store.touch();
        store.items.extend(batch);
    }

    /// Insert every element of `items` at `index` in `[0, len]`, in order.
    ///
    /// Nothing is inserted if `index` is out of range.
    pub fn insert_range(&self, index: usize, items: impl IntoIterator<Item = T>) -> Result<()> {
        let batch: Vec<T> = items.into_iter().collect();
        let mut store = self.store_mut();
        check_insert(index, store.items.len())?;
        store.touch();
        store.items.splice(index..index, batch);
        Ok(())
    }

    /// Remove `count` elements starting at `index`.
    pub fn remove_range(&self, index: usize, count: usize) -> Result<()> {
        let mut store = self.store_mut();
        let range = check_range(index, count, store.items.len())?;
        if count > 0 {
            store.touch();
            store.items.drain(range);
        }
        Ok(())
    }

    /// Remove every element matching `predicate`; returns how many went.
    pub fn remove_all(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let mut store = self.store_mut();
        let before = store.items.len();
        store.items.retain(|item| !predicate(item));
        let removed = before - store.items.len();
        if removed > 0 {
            store.touch();
        }
        removed
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// Reverse the whole sequence.
    pub fn reverse(&self) {
        let mut store = self.store_mut();
        store.touch();
        store.items.reverse();
    }

    /// Reverse `count` elements starting at `index`.
    pub fn reverse_range(&self, index: usize, count: usize) -> Result<()> {
        let mut store = self.store_mut();
        let range = check_range(index, count, store.items.len())?;
        store.touch();
        store.items[range].reverse();
        Ok(())
    }

    /// Stable sort with `compare`.
    pub fn sort_by(&self, compare: impl FnMut(&T, &T) -> Ordering) {
        let mut store = self.store_mut();
        store.touch();
        store.items.sort_by(compare);
    }

    /// Stable sort of `count` elements starting at `index`.
    pub fn sort_range_by(
        &self,
        index: usize,
        count: usize,
        compare: impl FnMut(&T, &T) -> Ordering,
    ) -> Result<()> {
        let mut store = self.store_mut();
        let range = check_range(index, count, store.items.len())?;
        store.touch();
        store.items[range].sort_by(compare);
        Ok(())
    }

    /// Binary search for `value`, comparing `compare(element, value)`.
    ///
    /// The sequence must already be ordered consistently with `compare`.
    /// Returns `Ok(index)` of a match or `Err(index)` where `value` would be
    /// inserted to keep the order.
    pub fn binary_search_by(
        &self,
        value: &T,
        mut compare: impl FnMut(&T, &T) -> Ordering,
    ) -> core::result::Result<usize, usize> {
        self.with_items(|items| items.binary_search_by(|item| compare(item, value)))
    }

    /// [`binary_search_by`](Self::binary_search_by) restricted to `count`
    /// elements starting at `index`. Positions are absolute.
    pub fn binary_search_range_by(
        &self,
        index: usize,
        count: usize,
        value: &T,
        mut compare: impl FnMut(&T, &T) -> Ordering,
    ) -> Result<core::result::Result<usize, usize>> {
        self.with_items(|items| {
            let range = check_range(index, count, items.len())?;
            Ok(items[range]
                .binary_search_by(|item| compare(item, value))
                .map(|found| found + index)
                .map_err(|vacant| vacant + index))
        })
    }

    // -------------------------------------------------------------------------
    // Predicate queries
    // -------------------------------------------------------------------------

    /// Index of the first element matching `predicate`.
    pub fn find_index(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.with_items(|items| items.iter().position(predicate))
    }

    /// Index of the first match at or after `start` (`start <= len`).
    pub fn find_index_from(
        &self,
        start: usize,
        predicate: impl FnMut(&T) -> bool,
    ) -> Result<Option<usize>> {
        self.with_items(|items| {
            check_insert(start, items.len())?;
            Ok(items[start..].iter().position(predicate).map(|found| found + start))
        })
    }

    /// Index of the first match among `count` elements starting at `start`.
    pub fn find_index_in(
        &self,
        start: usize,
        count: usize,
        predicate: impl FnMut(&T) -> bool,
    ) -> Result<Option<usize>> {
        self.with_items(|items| {
            let range = check_range(start, count, items.len())?;
            Ok(items[range].iter().position(predicate).map(|found| found + start))
        })
    }

    /// Index of the last element matching `predicate`.
    pub fn find_last_index(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.with_items(|items| items.iter().rposition(predicate))
    }

    /// Index of the last match among `count` elements ending at `start`
    /// (inclusive), scanning backwards.
    pub fn find_last_index_in(
        &self,
        start: usize,
        count: usize,
        predicate: impl FnMut(&T) -> bool,
    ) -> Result<Option<usize>> {
        self.with_items(|items| {
            if items.is_empty() {
                return Ok(None);
            }
            let range = check_backward(start, count, items.len())?;
            let first = range.start;
            Ok(items[range].iter().rposition(predicate).map(|found| found + first))
        })
    }

    /// Whether any element matches `predicate`.
    pub fn exists(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.find_index(predicate).is_some()
    }

    /// Whether every element matches `predicate` (true when empty).
    pub fn true_for_all(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.with_items(|items| items.iter().all(|item| predicate(item)))
    }

    // -------------------------------------------------------------------------
    // Enumeration
    // -------------------------------------------------------------------------

    /// Fail-fast enumeration over the current elements.
    ///
    /// Any modification of the store after this call makes the next advance
    /// yield [`ConcurrentModification`](crate::Error::ConcurrentModification).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Clone> Sequence<T> {
    /// Element at `index` in `[0, len)`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.with_items(|items| {
            check_index(index, items.len())?;
            Ok(items[index].clone())
        })
    }

    /// New sequence holding `count` elements starting at `index`.
    pub fn get_range(&self, index: usize, count: usize) -> Result<Sequence<T>> {
        self.with_items(|items| {
            let range = check_range(index, count, items.len())?;
            Ok(Sequence::from_vec(items[range].to_vec()))
        })
    }

    /// Independent snapshot of the current elements.
    #[doc(alias = "to_array")]
    pub fn to_vec(&self) -> Vec<T> {
        self.with_items(<[T]>::to_vec)
    }

    /// Copy every element into `buffer` starting at slot `offset`.
    pub fn copy_to(&self, buffer: &mut [Option<T>], offset: usize) -> Result<()> {
        let len = self.len();
        self.copy_range_to(0, buffer, offset, len)
    }

    /// Copy `count` elements starting at `index` into `buffer` at `offset`.
    pub fn copy_range_to(
        &self,
        index: usize,
        buffer: &mut [Option<T>],
        offset: usize,
        count: usize,
    ) -> Result<()> {
        self.with_items(|items| {
            let source = check_range(index, count, items.len())?;
            let slots = check_buffer(count, offset, buffer.len())?;
            for (slot, item) in buffer[slots].iter_mut().zip(&items[source]) {
                *slot = Some(item.clone());
            }
            Ok(())
        })
    }

    /// First element matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.with_items(|items| items.iter().find(|item| predicate(item)).cloned())
    }

    /// Last element matching `predicate`.
    pub fn find_last(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.with_items(|items| items.iter().rev().find(|item| predicate(item)).cloned())
    }

    /// New sequence of every element matching `predicate`, in order.
    pub fn find_all(&self, mut predicate: impl FnMut(&T) -> bool) -> Sequence<T> {
        self.with_items(|items| {
            items.iter().filter(|item| predicate(item)).cloned().collect()
        })
    }

    /// Apply `action` to each element in order.
    ///
    /// The store is not borrowed while `action` runs; if it modifies the
    /// sequence the call stops with
    /// [`ConcurrentModification`](crate::Error::ConcurrentModification).
    pub fn for_each(&self, mut action: impl FnMut(T)) -> Result<()> {
        for item in self.iter() {
            action(item?);
        }
        Ok(())
    }
}

impl<T> Sequence<T> {
    /// New independent sequence of `convert(element)` for every element.
    pub fn convert_all<U>(&self, mut convert: impl FnMut(&T) -> U) -> Sequence<U> {
        self.with_items(|items| items.iter().map(|item| convert(item)).collect())
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.find_index(|item| item == value)
    }

    /// Index of the first equal element at or after `start` (`start <= len`).
    pub fn index_of_from(&self, value: &T, start: usize) -> Result<Option<usize>> {
        self.find_index_from(start, |item| item == value)
    }

    /// Index of the first equal element among `count` elements at `start`.
    pub fn index_of_in(&self, value: &T, start: usize, count: usize) -> Result<Option<usize>> {
        self.find_index_in(start, count, |item| item == value)
    }

    /// Index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.find_last_index(|item| item == value)
    }

    /// Index of the last equal element among `count` elements ending at
    /// `start` (inclusive).
    pub fn last_index_of_in(&self, value: &T, start: usize, count: usize) -> Result<Option<usize>> {
        self.find_last_index_in(start, count, |item| item == value)
    }

    /// Remove the first element equal to `value`. Returns whether one was found.
    pub fn remove(&self, value: &T) -> bool {
        let mut store = self.store_mut();
        match store.items.iter().position(|item| item == value) {
            Some(index) => {
                store.touch();
                store.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T: Ord> Sequence<T> {
    /// Stable sort by the natural order of `T`.
    pub fn sort(&self) {
        self.sort_by(T::cmp);
    }

    /// Binary search by the natural order of `T`.
    pub fn binary_search(&self, value: &T) -> core::result::Result<usize, usize> {
        self.binary_search_by(value, T::cmp)
    }
}

// =============================================================================
// Trait impls
// =============================================================================

/// Cloning creates another alias of the same store, never a copy.
impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.store.try_borrow() {
            Ok(store) => f.debug_list().entries(store.items.iter()).finish(),
            Err(_) => f.write_str("Sequence(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    fn numbers(items: &[i32]) -> Sequence<i32> {
        Sequence::from_vec(items.to_vec())
    }

    #[test]
    fn test_insert_and_remove_shift_elements() {
        let seq = numbers(&[1, 2, 4]);
        seq.insert(2, 3).unwrap();
        seq.insert(4, 5).unwrap();
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);

        assert_eq!(seq.remove_at(0), Ok(1));
        assert_eq!(seq.to_vec(), vec![2, 3, 4, 5]);
        assert_eq!(seq.insert(9, 0), Err(Error::IndexOutOfRange { index: 9, len: 4 }));
        assert_eq!(seq.remove_at(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn test_remove_by_value_takes_first_match() {
        let seq = numbers(&[7, 8, 7]);
        assert!(seq.remove(&7));
        assert_eq!(seq.to_vec(), vec![8, 7]);
        assert!(!seq.remove(&1));
    }

    #[test]
    fn test_bounded_searches() {
        let seq = numbers(&[1, 2, 3, 1, 2, 3]);
        assert_eq!(seq.index_of(&3), Some(2));
        assert_eq!(seq.index_of_from(&3, 3), Ok(Some(5)));
        assert_eq!(seq.index_of_from(&3, 6), Ok(None));
        assert_eq!(seq.index_of_in(&3, 3, 2), Ok(None));
        assert_eq!(seq.last_index_of(&1), Some(3));
        assert_eq!(seq.last_index_of_in(&1, 2, 3), Ok(Some(0)));
        assert_eq!(seq.last_index_of_in(&3, 4, 2), Ok(None));
        assert!(seq.index_of_from(&1, 7).is_err());
        assert!(seq.last_index_of_in(&1, 6, 1).is_err());
    }

    #[test]
    fn test_empty_backward_search_is_not_found() {
        let seq: Sequence<i32> = Sequence::new();
        assert_eq!(seq.last_index_of_in(&1, 0, 0), Ok(None));
        assert_eq!(seq.find_last_index_in(0, 0, |_| true), Ok(None));
    }

    #[test]
    fn test_range_operations() {
        let seq = numbers(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(seq.get_range(1, 3).unwrap().to_vec(), vec![1, 2, 3]);

        seq.reverse_range(1, 3).unwrap();
        assert_eq!(seq.to_vec(), vec![0, 3, 2, 1, 4, 5]);

        seq.remove_range(4, 2).unwrap();
        assert_eq!(seq.to_vec(), vec![0, 3, 2, 1]);

        assert_eq!(
            seq.remove_range(3, 2),
            Err(Error::RangeOutOfBounds { index: 3, count: 2, len: 4 })
        );
    }

    #[test]
    fn test_stable_sort() {
        let seq = Sequence::from_vec(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        seq.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(seq.to_vec(), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_binary_search_reports_insertion_point() {
        let seq = numbers(&[10, 20, 30, 40]);
        assert_eq!(seq.binary_search(&30), Ok(2));
        assert_eq!(seq.binary_search(&25), Err(2));
        assert_eq!(seq.binary_search(&50), Err(4));
        assert_eq!(seq.binary_search_range_by(2, 2, &10, i32::cmp), Ok(Err(2)));
        assert_eq!(seq.binary_search_range_by(1, 2, &30, i32::cmp), Ok(Ok(2)));
    }

    #[test]
    fn test_bulk_insert_keeps_order() {
        let seq = numbers(&[1, 5]);
        seq.insert_range(1, [2, 3, 4]).unwrap();
        seq.add_range(vec![6, 7]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(seq.insert_range(9, [0]).is_err());
        assert_eq!(seq.len(), 7);
    }

    #[test]
    fn test_add_range_from_own_snapshot() {
        let seq = numbers(&[1, 2]);
        seq.add_range(seq.to_vec());
        assert_eq!(seq.to_vec(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_predicates() {
        let seq = numbers(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(seq.find(|n| n % 2 == 0), Some(2));
        assert_eq!(seq.find_last(|n| n % 2 == 0), Some(6));
        assert_eq!(seq.find_all(|n| n % 3 == 0).to_vec(), vec![3, 6]);
        assert_eq!(seq.find_index_in(3, 3, |n| *n < 3), Ok(None));
        assert_eq!(seq.find_last_index(|n| *n < 3), Some(1));
        assert!(seq.exists(|n| *n == 6));
        assert!(seq.true_for_all(|n| *n > 0));
        assert_eq!(seq.remove_all(|n| n % 2 == 1), 3);
        assert_eq!(seq.to_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn test_convert_all_is_independent() {
        let seq = numbers(&[1, 2]);
        let labels = seq.convert_all(|n| n * 10);
        seq.clear();
        assert_eq!(labels.to_vec(), vec![10, 20]);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_copy_to_checks_buffer() {
        let seq = numbers(&[1, 2, 3]);
        let mut buffer = vec![None; 4];
        seq.copy_to(&mut buffer, 1).unwrap();
        assert_eq!(buffer, vec![None, Some(1), Some(2), Some(3)]);

        assert_eq!(
            seq.copy_to(&mut buffer, 2),
            Err(Error::BufferTooSmall { required: 3, available: 2 })
        );
        seq.copy_range_to(1, &mut buffer, 0, 1).unwrap();
        assert_eq!(buffer[0], Some(2));
    }

    #[test]
    fn test_clone_is_an_alias() {
        let seq = numbers(&[1]);
        let alias = seq.clone();
        alias.add(2);
        assert!(seq.ptr_eq(&alias));
        assert_eq!(seq.to_vec(), vec![1, 2]);
        assert_eq!(seq.alias_count(), 2);
    }

    #[test]
    fn test_trim_excess() {
        let seq: Sequence<i32> = Sequence::with_capacity(64);
        seq.add(1);
        seq.trim_excess();
        assert!(seq.capacity() < 64);
        assert_eq!(seq.to_vec(), vec![1]);
    }

    #[test]
    fn test_for_each_detects_mutation() {
        let seq = numbers(&[1, 2, 3]);
        let mut seen = Vec::new();
        seq.for_each(|n| seen.push(n)).unwrap();
        assert_eq!(seen, vec![1, 2, 3]);

        let result = seq.for_each(|n| {
            if n == 2 {
                seq.add(4);
            }
        });
        assert_eq!(result, Err(Error::ConcurrentModification));
    }
}
