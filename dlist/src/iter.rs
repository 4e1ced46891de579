use crate::core::DList;

/// Iterator over list values in head-to-tail order
///
/// This iterator implements `Clone`.
pub struct DListIter<'a, T> {
    list: &'a DList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<T> Clone for DListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for DListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.list.slot(self.cursor?)?;
        self.cursor = slot.next;
        self.remaining -= 1;
        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for DListIter<'_, T> {}

impl<'a, T> IntoIterator for &'a DList<T> {
    type Item = &'a T;
    type IntoIter = DListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DListIter {
            list: self,
            cursor: self.head_index(),
            remaining: self.len(),
        }
    }
}

/// Iterator over list values in tail-to-head order, following the backward
/// links
///
/// This iterator implements `Clone`.
pub struct DListRevIter<'a, T> {
    list: &'a DList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> DListRevIter<'a, T> {
    pub(crate) fn new(list: &'a DList<T>) -> Self {
        Self {
            list,
            cursor: list.tail_index(),
            remaining: list.len(),
        }
    }
}

impl<T> Clone for DListRevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for DListRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.list.slot(self.cursor?)?;
        self.cursor = slot.prev;
        self.remaining -= 1;
        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for DListRevIter<'_, T> {}
