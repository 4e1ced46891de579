use std::fmt;

use crate::iter::{DListIter, DListRevIter};

#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

/// A doubly linked list whose nodes live in an arena.
///
/// Links are slot indices rather than pointers: the forward link expresses
/// the list order and the backward link is a non-owning index used only for
/// reverse traversal, so there are no ownership cycles to break on drop.
///
/// For every adjacent pair `(a, b)` with `a.next == b` the list maintains
/// `b.prev == a`; `is_consistent` checks this.
#[derive(Debug, Clone)]
pub struct DList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> DList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends a value after the current tail. O(1).
    pub fn push_back(&mut self, value: T) {
        let index = self.slots.len();
        self.slots.push(Slot {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.slots[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Inserts a value before the current head. O(1).
    pub fn push_front(&mut self, value: T) {
        let index = self.slots.len();
        self.slots.push(Slot {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => self.slots[head].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    /// Returns a reference to the head value.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|index| self.slots.get(index))
            .map(|slot| &slot.value)
    }

    /// Returns a reference to the tail value.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|index| self.slots.get(index))
            .map(|slot| &slot.value)
    }

    /// Removes all elements and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator over the values in head-to-tail order.
    #[must_use]
    pub fn iter(&self) -> DListIter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the values in tail-to-head order, following
    /// the backward links.
    #[must_use]
    pub fn iter_rev(&self) -> DListRevIter<'_, T> {
        DListRevIter::new(self)
    }

    /// Checks the bidirectional link invariant: walking forward from the
    /// head visits every slot exactly once, each slot's `prev` names the
    /// slot just visited, and the walk ends at the tail.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut visited = 0usize;
        let mut prev = None;
        let mut cur = self.head;

        while let Some(index) = cur {
            let Some(slot) = self.slots.get(index) else {
                return false;
            };
            if slot.prev != prev {
                return false;
            }
            visited += 1;
            if visited > self.slots.len() {
                // A cycle: more steps than slots
                return false;
            }
            prev = cur;
            cur = slot.next;
        }

        prev == self.tail && visited == self.slots.len()
    }

    pub(crate) fn head_index(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn tail_index(&self) -> Option<usize> {
        self.tail
    }

    pub(crate) fn slot(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index)
    }
}

impl<T> Default for DList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for DList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DList<T> {}

impl<T: fmt::Display> fmt::Display for DList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} <-> ")?;
        }
        write!(f, "None")
    }
}
