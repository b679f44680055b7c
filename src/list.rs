//! # Layer 3: The covariant list
//!
//! [`CovariantList<C>`] owns the handle to one store of bottom-type values
//! and hands out a view per level of its chain.
//!
//! ```ignore
//! let pets: CovariantList<chain![dyn Animal, dyn Dog, Labrador]> = CovariantList::new();
//! pets.bottom().add(Rc::new(Labrador::new("Rex")))?;
//! let animals = pets.top();             // View of Rc<dyn Animal>
//! let dogs = pets.view::<L2>();         // View of Rc<dyn Dog>
//! assert_eq!(animals.len(), dogs.len());
//! ```

use alloc::rc::Rc;
use core::fmt;

use crate::chain::{At, ItemAt, MAX_DEPTH, MIN_DEPTH, TypeChain};
use crate::primitives::{L1, Level};
use crate::store::Sequence;
use crate::view::{ListView, View};

/// A list of bottom-type values viewable through every level of chain `C`.
///
/// Chains of fewer than two or more than five levels are rejected when a
/// list is constructed.
///
/// ```
/// use core::any::Any;
/// use tola_covariant::{CovariantList, chain};
///
/// struct Wolf;
///
/// let list: CovariantList<chain![dyn Any, Wolf]> = CovariantList::new();
/// assert!(list.is_empty());
/// ```
///
/// A single level is not a chain:
///
/// ```compile_fail
/// use tola_covariant::{CovariantList, chain};
///
/// struct Wolf;
///
/// let list: CovariantList<chain![Wolf]> = CovariantList::new();
/// assert!(list.is_empty());
/// ```
///
/// Neither is a chain of six:
///
/// ```compile_fail
/// use core::any::Any;
/// use tola_covariant::{CovariantList, chain};
///
/// struct Wolf;
///
/// type Six = chain![dyn Any, dyn Any, dyn Any, dyn Any, dyn Any, Wolf];
/// let list: CovariantList<Six> = CovariantList::new();
/// assert!(list.is_empty());
/// ```
pub struct CovariantList<C: TypeChain> {
    pub(crate) sequence: Sequence<Rc<C::Bottom>>,
}

impl<C: TypeChain> CovariantList<C> {
    const SUPPORTED_DEPTH: () = assert!(
        C::DEPTH >= MIN_DEPTH && C::DEPTH <= MAX_DEPTH,
        "covariant lists support chains of 2 to 5 levels"
    );

    /// Create an empty list.
    pub fn new() -> Self {
        Self::from_sequence(Sequence::new())
    }

    /// Create an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_sequence(Sequence::with_capacity(capacity))
    }

    pub(crate) fn from_sequence(sequence: Sequence<Rc<C::Bottom>>) -> Self {
        let () = Self::SUPPORTED_DEPTH;
        Self { sequence }
    }

    /// Number of levels in the chain.
    pub const fn depth(&self) -> usize {
        C::DEPTH
    }

    /// View the list at level `L`.
    pub fn view<L: Level>(&self) -> View<'_, C, L>
    where
        C: At<L>,
    {
        View::new(&self.sequence)
    }

    /// View the list as its most general type.
    pub fn top(&self) -> View<'_, C, L1>
    where
        C: At<L1>,
    {
        self.view()
    }

    /// View the list as the bottom type itself. Writes here never mismatch.
    pub fn bottom(&self) -> View<'_, C, <C as TypeChain>::BottomLevel>
    where
        C: At<<C as TypeChain>::BottomLevel>,
    {
        self.view()
    }

    /// Borrow the backing sequence.
    pub fn as_sequence(&self) -> &Sequence<Rc<C::Bottom>> {
        &self.sequence
    }

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

    pub fn trim_excess(&self) {
        self.sequence.trim_excess();
    }

    pub fn clear(&self) {
        self.sequence.clear();
    }
}

impl<C: TypeChain> Default for CovariantList<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TypeChain> FromIterator<Rc<C::Bottom>> for CovariantList<C> {
    fn from_iter<I: IntoIterator<Item = Rc<C::Bottom>>>(iter: I) -> Self {
        Self::from_sequence(iter.into_iter().collect())
    }
}

impl<C: TypeChain> Extend<Rc<C::Bottom>> for CovariantList<C> {
    fn extend<I: IntoIterator<Item = Rc<C::Bottom>>>(&mut self, iter: I) {
        self.sequence.add_range(iter);
    }
}

impl<C: TypeChain> fmt::Debug for CovariantList<C>
where
    C::Bottom: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CovariantList")
            .field("depth", &C::DEPTH)
            .field("items", &self.sequence)
            .finish()
    }
}

// =============================================================================
// ListAt
// =============================================================================

/// A list that has a level `L` whose elements are `Rc<Self::Item>`.
///
/// Generic code can ask for "a list with dogs at level 2" without naming the
/// rest of the chain:
///
/// ```ignore
/// fn count_dogs(list: &impl ListAt<L2, Item = dyn Dog>) -> usize {
///     list.at_level().len()
/// }
/// ```
pub trait ListAt<L: Level> {
    type Item: ?Sized;

    type Access<'s>: ListView<Item = Self::Item>
    where
        Self: 's;

    fn at_level(&self) -> Self::Access<'_>;
}

impl<C: At<L>, L: Level> ListAt<L> for CovariantList<C>
where
    C::Bottom: PartialEq,
{
    type Item = ItemAt<C, L>;
    type Access<'s>
        = View<'s, C, L>
    where
        Self: 's;

    fn at_level(&self) -> View<'_, C, L> {
        self.view()
    }
}
