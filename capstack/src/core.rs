use crate::error::CapStackError;
use crate::iter::CapStackIter;

const DEFAULT_CAPACITY: usize = 8;

/// A fixed-capacity LIFO stack over a buffer allocated once at construction.
///
/// The occupied region is always the prefix `[0, len)` of the buffer; the
/// most recently pushed element sits at index `len - 1`.
#[derive(Debug, Clone)]
pub struct CapStack<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T> CapStack<T> {
    /// Creates a stack that holds at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `CapStackError::InvalidCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, CapStackError> {
        if capacity == 0 {
            return Err(CapStackError::InvalidCapacity { capacity });
        }

        Ok(Self {
            items: Vec::with_capacity(capacity),
            cap: capacity,
        })
    }

    /// Creates a stack with the default capacity (8).
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            cap: DEFAULT_CAPACITY,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.cap
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Pushes a value onto the stack.
    ///
    /// # Errors
    ///
    /// Returns `CapStackError::Overflow` if the stack is full. The value is
    /// dropped and the stack is left unchanged.
    pub fn push(&mut self, value: T) -> Result<(), CapStackError> {
        if self.items.len() == self.cap {
            return Err(CapStackError::Overflow { capacity: self.cap });
        }

        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the most recently pushed value.
    ///
    /// Returns `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Tries to remove and return the most recently pushed value.
    ///
    /// # Errors
    ///
    /// Returns `CapStackError::Underflow` if the stack is empty.
    pub fn try_pop(&mut self) -> Result<T, CapStackError> {
        self.items.pop().ok_or(CapStackError::Underflow)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// Returns `None` if the stack is empty.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Tries to return a reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `CapStackError::Underflow` if the stack is empty.
    pub fn try_top(&self) -> Result<&T, CapStackError> {
        self.items.last().ok_or(CapStackError::Underflow)
    }

    /// Gets the element at `index`, counted from the bottom of the stack.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Removes all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the occupied region as a slice, bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements from bottom to top.
    #[must_use]
    pub fn iter(&self) -> CapStackIter<'_, T> {
        self.into_iter()
    }
}
