//! # Layer 4: Conversions
//!
//! A list and its raw sequence convert into each other without copying:
//! both sides keep pointing at the same store.
//!
//! ```text
//! Sequence<Rc<Tn>> ──wrap──▶ CovariantList<C> ──unwrap──▶ Sequence<Rc<Tn>>
//!        └──────────────── Sequence::ptr_eq ─────────────────┘
//! ```

use alloc::rc::Rc;

use crate::chain::TypeChain;
use crate::error::{Error, Result};
use crate::list::CovariantList;
use crate::store::Sequence;

impl<C: TypeChain> CovariantList<C> {
    /// Adopt `sequence` as the backing store. Absent in, absent out.
    pub fn wrap(sequence: Option<Sequence<Rc<C::Bottom>>>) -> Option<Self> {
        let sequence = sequence?;
        tracing::trace!(depth = C::DEPTH, len = sequence.len(), "wrapped sequence");
        Some(Self::from_sequence(sequence))
    }

    /// Like [`wrap`](Self::wrap), but an absent sequence is an error.
    pub fn try_from_raw(sequence: Option<Sequence<Rc<C::Bottom>>>) -> Result<Self> {
        Self::wrap(sequence).ok_or(Error::AbsentArgument {
            argument: "sequence",
        })
    }

    /// Another alias of the backing sequence. Not a copy.
    pub fn unwrap(&self) -> Sequence<Rc<C::Bottom>> {
        tracing::trace!(depth = C::DEPTH, len = self.len(), "unwrapped sequence");
        self.sequence.clone()
    }

    /// Give up the list and keep its backing sequence.
    pub fn into_sequence(self) -> Sequence<Rc<C::Bottom>> {
        self.sequence
    }
}

impl<C: TypeChain> From<Sequence<Rc<C::Bottom>>> for CovariantList<C> {
    fn from(sequence: Sequence<Rc<C::Bottom>>) -> Self {
        Self::from_sequence(sequence)
    }
}

impl<C: TypeChain> From<CovariantList<C>> for Sequence<Rc<C::Bottom>> {
    fn from(list: CovariantList<C>) -> Self {
        list.into_sequence()
    }
}
