//! Ancestor-typed views over the shared store.
//!
//! A [`View<'a, C, L>`] shows the store of a list with chain `C` as a list of
//! `Rc<ItemAt<C, L>>`. Reads widen the stored bottom-type handles, which
//! always succeeds. Writes take ancestor-typed handles and must narrow them
//! back to the bottom type first:
//!
//! ```text
//!            read (widen, infallible)
//!   Store ─────────────────────────────▶ Rc<Ti>
//!   Rc<Tn>
//!         ◀───────────────────────────── Rc<Ti>
//!            write (narrow, TypeMismatch on failure)
//! ```
//!
//! Equality lookups narrow their probe too, but a probe that is not a bottom
//! value is simply absent: `contains` answers `false`, `index_of` answers
//! `None`, `remove` removes nothing. Only writes report a type error.

use alloc::{rc::Rc, vec::Vec};
use core::any::type_name;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::read_only::ReadOnly;
use crate::chain::{At, ItemAt, TypeChain};
use crate::error::{Error, Result};
use crate::primitives::{Ancestor, Level};
use crate::store::bounds::{check_backward, check_buffer, check_insert, check_range};
use crate::store::{Iter, Sequence};

// =============================================================================
// Level conversions
// =============================================================================

#[inline]
fn widen<C: At<L>, L: Level>(item: Rc<C::Bottom>) -> Rc<ItemAt<C, L>> {
    <ItemAt<C, L> as Ancestor<C::Bottom>>::widen(item)
}

#[inline]
fn widen_ref<C: At<L>, L: Level>(item: &C::Bottom) -> &ItemAt<C, L> {
    <ItemAt<C, L> as Ancestor<C::Bottom>>::widen_ref(item)
}

#[inline]
fn narrow<C: At<L>, L: Level>(value: &Rc<ItemAt<C, L>>) -> Option<Rc<C::Bottom>> {
    <ItemAt<C, L> as Ancestor<C::Bottom>>::narrow(value)
}

/// Narrow a value about to be stored, or explain why it cannot be.
fn admit<C: At<L>, L: Level>(
    value: &Rc<ItemAt<C, L>>,
    position: Option<usize>,
) -> Result<Rc<C::Bottom>> {
    narrow::<C, L>(value).ok_or_else(|| {
        let expected = type_name::<C::Bottom>();
        tracing::debug!(
            level = L::NUMBER,
            expected,
            position,
            "rejected write of a value that is not an instance of the bottom type"
        );
        Error::TypeMismatch {
            expected,
            level: L::NUMBER,
        }
    })
}

/// Narrow a whole batch. Nothing is returned unless every element passes.
fn admit_all<C: At<L>, L: Level>(
    values: impl IntoIterator<Item = Rc<ItemAt<C, L>>>,
) -> Result<Vec<Rc<C::Bottom>>> {
    values
        .into_iter()
        .enumerate()
        .map(|(position, value)| admit::<C, L>(&value, Some(position)))
        .collect()
}

// =============================================================================
// View
// =============================================================================

/// List of level-`L` values backed by the shared store of a list.
///
/// Views own nothing: creating or dropping one has no effect on the store,
/// and every view of the same store sees every mutation immediately.
pub struct View<'a, C: TypeChain, L> {
    sequence: &'a Sequence<Rc<C::Bottom>>,
    level: PhantomData<fn() -> L>,
}

impl<C: TypeChain, L> Clone for View<'_, C, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TypeChain, L> Copy for View<'_, C, L> {}

impl<'a, C: At<L>, L: Level> View<'a, C, L> {
    pub(crate) fn new(sequence: &'a Sequence<Rc<C::Bottom>>) -> Self {
        Self {
            sequence,
            level: PhantomData,
        }
    }

    /// One-based level number of this view (1 is the top of the chain).
    pub fn level(&self) -> usize {
        L::NUMBER
    }

    /// Read-only façade over this view.
    pub fn as_read_only(&self) -> ReadOnly<'a, C, L> {
        ReadOnly::new(*self)
    }

    // -------------------------------------------------------------------------
    // Size
    // -------------------------------------------------------------------------

    #[doc(alias = "count")]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.sequence.capacity()
    }

    // -------------------------------------------------------------------------
    // Element access
    // -------------------------------------------------------------------------

    /// Element at `index`, seen at this level.
    pub fn get(&self, index: usize) -> Result<Rc<ItemAt<C, L>>> {
        self.sequence.get(index).map(widen::<C, L>)
    }

    /// Replace the element at `index`. `value` must be a bottom-type value.
    pub fn set(&self, index: usize, value: Rc<ItemAt<C, L>>) -> Result<()> {
        let item = admit::<C, L>(&value, None)?;
        self.sequence.set(index, item)
    }

    /// Append `value`, which must be a bottom-type value.
    pub fn add(&self, value: Rc<ItemAt<C, L>>) -> Result<()> {
        let item = admit::<C, L>(&value, None)?;
        self.sequence.add(item);
        Ok(())
    }

    /// Insert `value` at `index`. The type is checked before the index.
    pub fn insert(&self, index: usize, value: Rc<ItemAt<C, L>>) -> Result<()> {
        let item = admit::<C, L>(&value, None)?;
        self.sequence.insert(index, item)
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&self, index: usize) -> Result<Rc<ItemAt<C, L>>> {
        self.sequence.remove_at(index).map(widen::<C, L>)
    }

    /// Empty the store, at every level.
    pub fn clear(&self) {
        self.sequence.clear();
    }

    // -------------------------------------------------------------------------
    // Bulk operations
    // -------------------------------------------------------------------------

    /// Append every value, or none of them if any is not a bottom value.
    pub fn add_range(&self, values: impl IntoIterator<Item = Rc<ItemAt<C, L>>>) -> Result<()> {
        let batch = admit_all::<C, L>(values)?;
        self.sequence.add_range(batch);
        Ok(())
    }

    /// Insert every value at `index`, or none of them.
    ///
    /// The batch is checked before the index.
    pub fn insert_range(
        &self,
        index: usize,
        values: impl IntoIterator<Item = Rc<ItemAt<C, L>>>,
    ) -> Result<()> {
        let batch = admit_all::<C, L>(values)?;
        self.sequence.insert_range(index, batch)
    }

    pub fn remove_range(&self, index: usize, count: usize) -> Result<()> {
        self.sequence.remove_range(index, count)
    }

    /// New independent sequence of `count` elements starting at `index`.
    pub fn get_range(&self, index: usize, count: usize) -> Result<Sequence<Rc<ItemAt<C, L>>>> {
        self.sequence.with_items(|items| {
            let range = check_range(index, count, items.len())?;
            Ok(items[range].iter().cloned().map(widen::<C, L>).collect())
        })
    }

    /// Copy every element into `buffer` starting at slot `offset`.
    pub fn copy_to(&self, buffer: &mut [Option<Rc<ItemAt<C, L>>>], offset: usize) -> Result<()> {
        let len = self.len();
        self.copy_range_to(0, buffer, offset, len)
    }

    /// Copy `count` elements starting at `index` into `buffer` at `offset`.
    pub fn copy_range_to(
        &self,
        index: usize,
        buffer: &mut [Option<Rc<ItemAt<C, L>>>],
        offset: usize,
        count: usize,
    ) -> Result<()> {
        self.sequence.with_items(|items| {
            let source = check_range(index, count, items.len())?;
            let slots = check_buffer(count, offset, buffer.len())?;
            for (slot, item) in buffer[slots].iter_mut().zip(&items[source]) {
                *slot = Some(widen::<C, L>(Rc::clone(item)));
            }
            Ok(())
        })
    }

    /// Independent snapshot of the elements, seen at this level.
    #[doc(alias = "to_array")]
    pub fn to_vec(&self) -> Vec<Rc<ItemAt<C, L>>> {
        self.sequence
            .with_items(|items| items.iter().cloned().map(widen::<C, L>).collect())
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// Reverse the stored elements. Visible from every level.
    pub fn reverse(&self) {
        self.sequence.reverse();
    }

    pub fn reverse_range(&self, index: usize, count: usize) -> Result<()> {
        self.sequence.reverse_range(index, count)
    }

    /// Stable sort of the stored elements, compared at this level.
    pub fn sort_by(&self, mut compare: impl FnMut(&ItemAt<C, L>, &ItemAt<C, L>) -> Ordering) {
        self.sequence
            .sort_by(|a, b| compare(widen_ref::<C, L>(a), widen_ref::<C, L>(b)));
    }

    pub fn sort_range_by(
        &self,
        index: usize,
        count: usize,
        mut compare: impl FnMut(&ItemAt<C, L>, &ItemAt<C, L>) -> Ordering,
    ) -> Result<()> {
        self.sequence.sort_range_by(index, count, |a, b| {
            compare(widen_ref::<C, L>(a), widen_ref::<C, L>(b))
        })
    }

    /// Binary search with a comparator over this level's type.
    ///
    /// `None` when `value` is not a bottom value; otherwise the position of
    /// a match (`Ok`) or the insertion point that keeps the order (`Err`).
    pub fn binary_search_by(
        &self,
        value: &Rc<ItemAt<C, L>>,
        mut compare: impl FnMut(&ItemAt<C, L>, &ItemAt<C, L>) -> Ordering,
    ) -> Option<core::result::Result<usize, usize>> {
        let probe = narrow::<C, L>(value)?;
        Some(self.sequence.binary_search_by(&probe, |item, probe| {
            compare(widen_ref::<C, L>(item), widen_ref::<C, L>(probe))
        }))
    }

    /// [`binary_search_by`](Self::binary_search_by) over `count` elements
    /// starting at `index`. The range is validated before the probe.
    pub fn binary_search_range_by(
        &self,
        index: usize,
        count: usize,
        value: &Rc<ItemAt<C, L>>,
        mut compare: impl FnMut(&ItemAt<C, L>, &ItemAt<C, L>) -> Ordering,
    ) -> Result<Option<core::result::Result<usize, usize>>> {
        let Some(probe) = narrow::<C, L>(value) else {
            check_range(index, count, self.len())?;
            return Ok(None);
        };
        self.sequence
            .binary_search_range_by(index, count, &probe, |item, probe| {
                compare(widen_ref::<C, L>(item), widen_ref::<C, L>(probe))
            })
            .map(Some)
    }

    // -------------------------------------------------------------------------
    // Predicate queries
    // -------------------------------------------------------------------------

    pub fn find(&self, mut predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> Option<Rc<ItemAt<C, L>>> {
        self.sequence
            .find(|item| predicate(widen_ref::<C, L>(item)))
            .map(widen::<C, L>)
    }

    pub fn find_last(
        &self,
        mut predicate: impl FnMut(&ItemAt<C, L>) -> bool,
    ) -> Option<Rc<ItemAt<C, L>>> {
        self.sequence
            .find_last(|item| predicate(widen_ref::<C, L>(item)))
            .map(widen::<C, L>)
    }

    /// New independent sequence of every matching element, in order.
    pub fn find_all(
        &self,
        mut predicate: impl FnMut(&ItemAt<C, L>) -> bool,
    ) -> Sequence<Rc<ItemAt<C, L>>> {
        self.sequence.with_items(|items| {
            items
                .iter()
                .filter(|item| predicate(widen_ref::<C, L>(item)))
                .cloned()
                .map(widen::<C, L>)
                .collect()
        })
    }

    pub fn find_index(&self, mut predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> Option<usize> {
        self.sequence
            .find_index(|item| predicate(widen_ref::<C, L>(item)))
    }

    pub fn find_index_from(
        &self,
        start: usize,
        mut predicate: impl FnMut(&ItemAt<C, L>) -> bool,
    ) -> Result<Option<usize>> {
        self.sequence
            .find_index_from(start, |item| predicate(widen_ref::<C, L>(item)))
    }

    pub fn find_index_in(
        &self,
        start: usize,
        count: usize,
        mut predicate: impl FnMut(&ItemAt<C, L>) -> bool,
    ) -> Result<Option<usize>> {
        self.sequence
            .find_index_in(start, count, |item| predicate(widen_ref::<C, L>(item)))
    }

    pub fn find_last_index(&self, mut predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> Option<usize> {
        self.sequence
            .find_last_index(|item| predicate(widen_ref::<C, L>(item)))
    }

    pub fn find_last_index_in(
        &self,
        start: usize,
        count: usize,
        mut predicate: impl FnMut(&ItemAt<C, L>) -> bool,
    ) -> Result<Option<usize>> {
        self.sequence
            .find_last_index_in(start, count, |item| predicate(widen_ref::<C, L>(item)))
    }

    pub fn exists(&self, mut predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> bool {
        self.sequence.exists(|item| predicate(widen_ref::<C, L>(item)))
    }

    pub fn true_for_all(&self, mut predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> bool {
        self.sequence
            .true_for_all(|item| predicate(widen_ref::<C, L>(item)))
    }

    /// Remove every matching element; returns how many went.
    pub fn remove_all(&self, mut predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> usize {
        self.sequence
            .remove_all(|item| predicate(widen_ref::<C, L>(item)))
    }

    // -------------------------------------------------------------------------
    // Enumeration and mapping
    // -------------------------------------------------------------------------

    /// Fail-fast enumeration of the elements, seen at this level.
    pub fn iter(&self) -> ViewIter<'a, C, L> {
        ViewIter {
            inner: self.sequence.iter(),
            level: PhantomData,
        }
    }

    /// Apply `action` to each element; fails if `action` modifies the store.
    pub fn for_each(&self, mut action: impl FnMut(Rc<ItemAt<C, L>>)) -> Result<()> {
        self.sequence.for_each(|item| action(widen::<C, L>(item)))
    }

    /// New independent sequence of `convert(element)`, in order.
    pub fn convert_all<U>(&self, mut convert: impl FnMut(&ItemAt<C, L>) -> U) -> Sequence<U> {
        self.sequence
            .convert_all(|item| convert(widen_ref::<C, L>(item)))
    }
}

impl<C: At<L>, L: Level> View<'_, C, L>
where
    C::Bottom: PartialEq,
{
    pub fn contains(&self, value: &Rc<ItemAt<C, L>>) -> bool {
        self.index_of(value).is_some()
    }

    pub fn index_of(&self, value: &Rc<ItemAt<C, L>>) -> Option<usize> {
        let probe = narrow::<C, L>(value)?;
        self.sequence.index_of(&probe)
    }

    /// First match at or after `start`. `start` is validated before the probe.
    pub fn index_of_from(&self, value: &Rc<ItemAt<C, L>>, start: usize) -> Result<Option<usize>> {
        match narrow::<C, L>(value) {
            Some(probe) => self.sequence.index_of_from(&probe, start),
            None => check_insert(start, self.len()).map(|()| None),
        }
    }

    pub fn index_of_in(
        &self,
        value: &Rc<ItemAt<C, L>>,
        start: usize,
        count: usize,
    ) -> Result<Option<usize>> {
        match narrow::<C, L>(value) {
            Some(probe) => self.sequence.index_of_in(&probe, start, count),
            None => check_range(start, count, self.len()).map(|_| None),
        }
    }

    pub fn last_index_of(&self, value: &Rc<ItemAt<C, L>>) -> Option<usize> {
        let probe = narrow::<C, L>(value)?;
        self.sequence.last_index_of(&probe)
    }

    /// Last match among `count` elements ending at `start` (inclusive).
    pub fn last_index_of_in(
        &self,
        value: &Rc<ItemAt<C, L>>,
        start: usize,
        count: usize,
    ) -> Result<Option<usize>> {
        match narrow::<C, L>(value) {
            Some(probe) => self.sequence.last_index_of_in(&probe, start, count),
            None => {
                let len = self.len();
                if len > 0 {
                    check_backward(start, count, len)?;
                }
                Ok(None)
            }
        }
    }

    /// Remove the first element equal to `value`.
    ///
    /// A `value` that is not a bottom value is never stored, so nothing is
    /// removed and the answer is `false`.
    pub fn remove(&self, value: &Rc<ItemAt<C, L>>) -> bool {
        match narrow::<C, L>(value) {
            Some(probe) => self.sequence.remove(&probe),
            None => false,
        }
    }
}

impl<C: At<L>, L: Level> View<'_, C, L>
where
    C::Bottom: Ord,
{
    /// Stable sort by the natural order of the bottom type.
    pub fn sort(&self) {
        self.sequence.sort();
    }

    /// Binary search by the natural order of the bottom type.
    pub fn binary_search(
        &self,
        value: &Rc<ItemAt<C, L>>,
    ) -> Option<core::result::Result<usize, usize>> {
        let probe = narrow::<C, L>(value)?;
        Some(self.sequence.binary_search(&probe))
    }
}

impl<'a, C: At<L>, L: Level> IntoIterator for View<'a, C, L> {
    type Item = Result<Rc<ItemAt<C, L>>>;
    type IntoIter = ViewIter<'a, C, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: TypeChain, L: Level> fmt::Debug for View<'_, C, L>
where
    C::Bottom: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("level", &L::NUMBER)
            .field("items", self.sequence)
            .finish()
    }
}

// =============================================================================
// ViewIter
// =============================================================================

/// Fail-fast enumerator returned by [`View::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ViewIter<'a, C: TypeChain, L> {
    inner: Iter<'a, Rc<C::Bottom>>,
    level: PhantomData<fn() -> L>,
}

impl<C: At<L>, L: Level> Iterator for ViewIter<'_, C, L> {
    type Item = Result<Rc<ItemAt<C, L>>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| item.map(widen::<C, L>))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<C: At<L>, L: Level> FusedIterator for ViewIter<'_, C, L> {}
