use std::fmt;

use crate::error::SListError;
use crate::iter::{Iter, IterMut};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

/// A singly linked list with exclusive ownership of its node chain.
///
/// Each node is owned by its predecessor (or by the list head), so the chain
/// is acyclic by construction. Walking `next` from the head visits exactly
/// `len()` nodes.
pub struct SList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts a value at the head of the list. O(1).
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends a value after the current tail. O(n): walks to the last node.
    pub fn push_back(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Inserts a value at `position`, shifting later elements towards the
    /// tail. Valid positions are `0..=len()`; `insert_at(len(), v)` appends.
    ///
    /// # Errors
    ///
    /// Returns `SListError::PositionOutOfRange` if `position > len()`. The
    /// list is left unchanged.
    pub fn insert_at(&mut self, position: usize, value: T) -> Result<(), SListError> {
        let len = self.len;
        match self.link_at_mut(position) {
            Some(link) => {
                let node = Box::new(Node {
                    value,
                    next: link.take(),
                });
                *link = Some(node);
                self.len += 1;
                Ok(())
            }
            None => Err(SListError::PositionOutOfRange { position, len }),
        }
    }

    /// Removes and returns the head value.
    ///
    /// Returns `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Tries to remove and return the head value.
    ///
    /// # Errors
    ///
    /// Returns `SListError::Empty` if the list is empty.
    pub fn try_pop_front(&mut self) -> Result<T, SListError> {
        self.pop_front().ok_or(SListError::Empty)
    }

    /// Removes and returns the tail value. O(n).
    ///
    /// Returns `None` if the list is empty; a single-element list becomes
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.remove_at(self.len - 1).ok()
    }

    /// Tries to remove and return the tail value.
    ///
    /// # Errors
    ///
    /// Returns `SListError::Empty` if the list is empty.
    pub fn try_pop_back(&mut self) -> Result<T, SListError> {
        self.pop_back().ok_or(SListError::Empty)
    }

    /// Removes and returns the value at `position`. Valid positions are
    /// `0..len()`.
    ///
    /// # Errors
    ///
    /// Returns `SListError::PositionOutOfRange` if `position >= len()`. The
    /// list is left unchanged.
    pub fn remove_at(&mut self, position: usize) -> Result<T, SListError> {
        let len = self.len;
        let removed = self.link_at_mut(position).and_then(Option::take);
        match removed {
            Some(node) => {
                let Node { value, next } = *node;
                // Splice the successor into the predecessor's link. The link
                // is empty after the take above, so this cannot fail.
                if let Some(link) = self.link_at_mut(position) {
                    *link = next;
                }
                self.len -= 1;
                Ok(value)
            }
            None => Err(SListError::PositionOutOfRange { position, len }),
        }
    }

    /// Returns a reference to the head value.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a reference to the tail value. O(n).
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Reverses the list in place by redirecting each node's `next` link to
    /// its predecessor. O(n) time, O(1) additional space.
    ///
    /// Reversal preserves the element count and is its own inverse.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        // Unlink iteratively so long chains do not recurse on drop
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over the values in head-to-tail order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator yielding mutable references in head-to-tail order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Walks to the link (predecessor's `next`, or the head link) that holds
    /// the node at `position`. Returns `Some` for positions `0..=len()`; the
    /// link at `len()` is the empty tail link.
    fn link_at_mut(&mut self, position: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..position {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl<T> Default for SList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SList<T> {
    fn drop(&mut self) {
        // Default recursive drop of the Box chain would overflow the stack
        // for long lists
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: Clone> Clone for SList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SList<T> {}

impl<T> FromIterator<T> for SList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Keep a cursor on the tail link so the whole batch appends in O(n)
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for value in iter {
            let node = link.insert(Box::new(Node { value, next: None }));
            self.len += 1;
            link = &mut node.next;
        }
    }
}

impl<T: fmt::Display> fmt::Display for SList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} -> ")?;
        }
        write!(f, "None")
    }
}

impl<T: fmt::Debug> fmt::Debug for SList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
