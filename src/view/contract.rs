//! The per-level list contract.

use alloc::rc::Rc;

use super::ancestor::{View, ViewIter};
use crate::chain::{At, ItemAt};
use crate::error::Result;
use crate::primitives::Level;

/// A mutable list whose elements are seen as `Rc<Self::Item>`.
///
/// Lets code accept any level of any list:
///
/// ```ignore
/// fn names(animals: &impl ListView<Item = dyn Animal>) -> Vec<String> { .. }
/// ```
///
/// Writes may still fail with a type mismatch: the list decides at runtime
/// which values it can store.
pub trait ListView {
    type Item: ?Sized;

    type Iter<'s>: Iterator<Item = Result<Rc<Self::Item>>>
    where
        Self: 's;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<Rc<Self::Item>>;
    fn set(&self, index: usize, value: Rc<Self::Item>) -> Result<()>;
    fn add(&self, value: Rc<Self::Item>) -> Result<()>;
    fn insert(&self, index: usize, value: Rc<Self::Item>) -> Result<()>;
    fn remove_at(&self, index: usize) -> Result<Rc<Self::Item>>;
    fn remove(&self, value: &Rc<Self::Item>) -> bool;
    fn clear(&self);
    fn contains(&self, value: &Rc<Self::Item>) -> bool;
    fn index_of(&self, value: &Rc<Self::Item>) -> Option<usize>;
    fn copy_to(&self, buffer: &mut [Option<Rc<Self::Item>>], offset: usize) -> Result<()>;
    fn iter(&self) -> Self::Iter<'_>;
}

impl<C: At<L>, L: Level> ListView for View<'_, C, L>
where
    C::Bottom: PartialEq,
{
    type Item = ItemAt<C, L>;
    type Iter<'s>
        = ViewIter<'s, C, L>
    where
        Self: 's;

    fn len(&self) -> usize {
        View::len(self)
    }

    fn get(&self, index: usize) -> Result<Rc<Self::Item>> {
        View::get(self, index)
    }

    fn set(&self, index: usize, value: Rc<Self::Item>) -> Result<()> {
        View::set(self, index, value)
    }

    fn add(&self, value: Rc<Self::Item>) -> Result<()> {
        View::add(self, value)
    }

    fn insert(&self, index: usize, value: Rc<Self::Item>) -> Result<()> {
        View::insert(self, index, value)
    }

    fn remove_at(&self, index: usize) -> Result<Rc<Self::Item>> {
        View::remove_at(self, index)
    }

    fn remove(&self, value: &Rc<Self::Item>) -> bool {
        View::remove(self, value)
    }

    fn clear(&self) {
        View::clear(self);
    }

    fn contains(&self, value: &Rc<Self::Item>) -> bool {
        View::contains(self, value)
    }

    fn index_of(&self, value: &Rc<Self::Item>) -> Option<usize> {
        View::index_of(self, value)
    }

    fn copy_to(&self, buffer: &mut [Option<Rc<Self::Item>>], offset: usize) -> Result<()> {
        View::copy_to(self, buffer, offset)
    }

    fn iter(&self) -> Self::Iter<'_> {
        View::iter(self)
    }
}
