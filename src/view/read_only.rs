//! Read-only façade over a view.

use alloc::{rc::Rc, vec::Vec};

use super::ancestor::{View, ViewIter};
use crate::chain::{At, ItemAt, TypeChain};
use crate::error::Result;
use crate::primitives::Level;

/// A level of a list with every mutating operation hidden.
///
/// Still a live view: mutations made elsewhere are visible through it.
pub struct ReadOnly<'a, C: TypeChain, L> {
    view: View<'a, C, L>,
}

impl<C: TypeChain, L> Clone for ReadOnly<'_, C, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TypeChain, L> Copy for ReadOnly<'_, C, L> {}

impl<'a, C: At<L>, L: Level> ReadOnly<'a, C, L> {
    pub(crate) fn new(view: View<'a, C, L>) -> Self {
        Self { view }
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<Rc<ItemAt<C, L>>> {
        self.view.get(index)
    }

    pub fn copy_to(&self, buffer: &mut [Option<Rc<ItemAt<C, L>>>], offset: usize) -> Result<()> {
        self.view.copy_to(buffer, offset)
    }

    pub fn to_vec(&self) -> Vec<Rc<ItemAt<C, L>>> {
        self.view.to_vec()
    }

    pub fn find(&self, predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> Option<Rc<ItemAt<C, L>>> {
        self.view.find(predicate)
    }

    pub fn find_index(&self, predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> Option<usize> {
        self.view.find_index(predicate)
    }

    pub fn exists(&self, predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> bool {
        self.view.exists(predicate)
    }

    pub fn true_for_all(&self, predicate: impl FnMut(&ItemAt<C, L>) -> bool) -> bool {
        self.view.true_for_all(predicate)
    }

    pub fn iter(&self) -> ViewIter<'a, C, L> {
        self.view.iter()
    }
}

impl<C: At<L>, L: Level> ReadOnly<'_, C, L>
where
    C::Bottom: PartialEq,
{
    pub fn contains(&self, value: &Rc<ItemAt<C, L>>) -> bool {
        self.view.contains(value)
    }

    pub fn index_of(&self, value: &Rc<ItemAt<C, L>>) -> Option<usize> {
        self.view.index_of(value)
    }

    pub fn last_index_of(&self, value: &Rc<ItemAt<C, L>>) -> Option<usize> {
        self.view.last_index_of(value)
    }
}

impl<'a, C: At<L>, L: Level> IntoIterator for ReadOnly<'a, C, L> {
    type Item = Result<Rc<ItemAt<C, L>>>;
    type IntoIter = ViewIter<'a, C, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.view.iter()
    }
}
