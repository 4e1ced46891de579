//! `RingQueue`: a fixed-capacity FIFO queue over a circular slot array.
//!
//! The queue keeps `front` and `rear` cursors that advance modulo the
//! capacity, so a long-lived queue reuses its slots instead of shifting
//! elements. It demonstrates circular indexing, not a dynamic queue: the
//! capacity is fixed at construction and an enqueue on a full queue is
//! rejected with [`RingQueueError::Full`] rather than growing the buffer.
//!
//! ```
//! use ringq::RingQueue;
//!
//! let mut queue = RingQueue::new(4).unwrap();
//!
//! queue.enqueue(10).unwrap();
//! queue.enqueue(20).unwrap();
//! queue.enqueue(30).unwrap();
//!
//! assert_eq!(queue.front(), Some(&10));
//! assert_eq!(queue.rear(), Some(&30));
//!
//! // FIFO order
//! assert_eq!(queue.dequeue(), Some(10));
//! assert_eq!(queue.dequeue(), Some(20));
//!
//! // Safe variants for error handling
//! queue.dequeue();
//! assert!(queue.try_dequeue().is_err());
//! assert!(queue.try_front().is_err());
//! ```

mod core;
mod error;
mod iter;

pub use crate::core::RingQueue;
pub use crate::error::RingQueueError;
pub use crate::iter::RingQueueIter;
