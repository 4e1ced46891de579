use crate::error::RingQueueError;
use crate::iter::RingQueueIter;

const DEFAULT_CAPACITY: usize = 4;

/// A fixed-capacity FIFO queue over a circular slot array.
///
/// Occupied slots form the contiguous circular run
/// `[front, front + len) mod capacity`. The buffer is allocated once at
/// construction and never resized: a full queue rejects further enqueues.
#[derive(Debug)]
pub struct RingQueue<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    count: usize,
}

impl<T> RingQueue<T> {
    /// Creates a queue that holds at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `RingQueueError::InvalidCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, RingQueueError> {
        if capacity == 0 {
            return Err(RingQueueError::InvalidCapacity { capacity });
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            front: 0,
            rear: 0,
            count: 0,
        })
    }

    /// Creates a queue with the default capacity (4).
    ///
    /// # Panics
    ///
    /// Never panics: the default capacity is non-zero.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY).expect("default capacity is non-zero")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Adds a value at the rear of the queue.
    ///
    /// # Errors
    ///
    /// Returns `RingQueueError::Full` if the queue is at capacity. The value
    /// is dropped and the queue is left unchanged. The queue never grows.
    pub fn enqueue(&mut self, value: T) -> Result<(), RingQueueError> {
        if self.count == self.slots.len() {
            return Err(RingQueueError::Full {
                capacity: self.slots.len(),
            });
        }

        if self.count == 0 {
            self.front = 0;
            self.rear = 0;
        } else {
            self.rear = (self.rear + 1) % self.slots.len();
        }

        self.slots[self.rear] = Some(value);
        self.count += 1;

        Ok(())
    }

    /// Removes and returns the value at the front of the queue.
    ///
    /// Returns `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let value = self.slots[self.front].take();
        self.count -= 1;

        if self.count == 0 {
            // Cursors go back to the start of the slot array
            self.front = 0;
            self.rear = 0;
        } else {
            self.front = (self.front + 1) % self.slots.len();
        }

        value
    }

    /// Tries to remove and return the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns `RingQueueError::Empty` if the queue is empty.
    pub fn try_dequeue(&mut self) -> Result<T, RingQueueError> {
        self.dequeue().ok_or(RingQueueError::Empty)
    }

    /// Returns a reference to the next value to be dequeued.
    ///
    /// Returns `None` if the queue is empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Tries to return a reference to the next value to be dequeued.
    ///
    /// # Errors
    ///
    /// Returns `RingQueueError::Empty` if the queue is empty.
    pub fn try_front(&self) -> Result<&T, RingQueueError> {
        self.front().ok_or(RingQueueError::Empty)
    }

    /// Returns a reference to the most recently enqueued value.
    ///
    /// Returns `None` if the queue is empty.
    #[must_use]
    pub fn rear(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.slots[self.rear].as_ref()
    }

    /// Tries to return a reference to the most recently enqueued value.
    ///
    /// # Errors
    ///
    /// Returns `RingQueueError::Empty` if the queue is empty.
    pub fn try_rear(&self) -> Result<&T, RingQueueError> {
        self.rear().ok_or(RingQueueError::Empty)
    }

    /// Removes all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.take();
        }
        self.front = 0;
        self.rear = 0;
        self.count = 0;
    }

    /// Returns an iterator over the elements in dequeue order.
    #[must_use]
    pub fn iter(&self) -> RingQueueIter<'_, T> {
        self.into_iter()
    }

    /// Gets the element `offset` positions behind the front, without
    /// removing it. `peek_at(0)` is the front element.
    pub(crate) fn peek_at(&self, offset: usize) -> Option<&T> {
        if offset >= self.count {
            return None;
        }
        let index = (self.front + offset) % self.slots.len();
        self.slots[index].as_ref()
    }
}
