//! `CapStack`: a fixed-capacity LIFO stack.
//!
//! The backing buffer is allocated once at construction and never grows.
//! Pushing onto a full stack and popping from an empty stack are ordinary,
//! recoverable conditions reported through [`CapStackError`] rather than
//! panics, so callers can branch on them.
//!
//! ```
//! use capstack::CapStack;
//!
//! let mut stack = CapStack::new(8).unwrap();
//!
//! stack.push(10).unwrap();
//! stack.push(20).unwrap();
//! stack.push(60).unwrap();
//!
//! assert_eq!(stack.top(), Some(&60));
//! assert_eq!(stack.pop(), Some(60));
//! assert_eq!(stack.pop(), Some(20));
//! assert_eq!(stack.pop(), Some(10));
//!
//! // Safe variants for error handling
//! assert!(stack.try_pop().is_err());
//! assert!(stack.try_top().is_err());
//! ```
//!
//! A full stack rejects the push and stays unchanged:
//!
//! ```
//! use capstack::{CapStack, CapStackError};
//!
//! let mut stack = CapStack::new(2).unwrap();
//! stack.push("a").unwrap();
//! stack.push("b").unwrap();
//!
//! assert_eq!(
//!     stack.push("c"),
//!     Err(CapStackError::Overflow { capacity: 2 })
//! );
//! assert_eq!(stack.len(), 2);
//! assert_eq!(stack.top(), Some(&"b"));
//! ```

mod core;
mod error;
mod iter;

pub use crate::core::CapStack;
pub use crate::error::CapStackError;
pub use crate::iter::CapStackIter;
