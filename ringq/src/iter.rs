use crate::core::RingQueue;

/// Iterator over queue elements in dequeue (front-to-rear) order
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct RingQueueIter<'a, T> {
    queue: &'a RingQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for RingQueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.queue.peek_at(self.offset)?;
        self.offset += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len().saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for RingQueueIter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = RingQueueIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        RingQueueIter {
            queue: self,
            offset: 0,
        }
    }
}
