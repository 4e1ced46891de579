use thiserror::Error;

/// Error types for `RingQueue` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RingQueueError {
    /// Enqueue attempted on a full queue; the queue is left unchanged
    #[error("Queue is full: capacity of {capacity} elements reached")]
    Full {
        /// Fixed capacity of the queue
        capacity: usize,
    },
    /// Dequeue or peek attempted on an empty queue
    #[error("Queue is empty")]
    Empty,
    /// Invalid capacity provided to `RingQueue::new`
    #[error("Invalid capacity: {capacity}")]
    InvalidCapacity {
        /// Capacity that was rejected
        capacity: usize,
    },
}
