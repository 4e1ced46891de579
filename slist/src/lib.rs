//! `SList`: a singly linked list with positional insert/remove and in-place
//! reversal.
//!
//! Each node owns its successor, so the chain is acyclic and freed
//! iteratively when the list is dropped. Out-of-range positions are reported
//! through [`SListError`] instead of being silently ignored, and tail removal
//! is guarded for empty and single-element lists.
//!
//! ```
//! use slist::SList;
//!
//! let mut list = SList::new();
//! for value in [10, 20, 30, 40, 50, 60] {
//!     list.push_back(value);
//! }
//!
//! list.reverse();
//! let values: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(values, vec![60, 50, 40, 30, 20, 10]);
//! ```
//!
//! Positional operations use 0-based positions; inserting at `len()`
//! appends:
//!
//! ```
//! use slist::{SList, SListError};
//!
//! let mut list: SList<&str> = ["a", "c"].into_iter().collect();
//! list.insert_at(1, "b").unwrap();
//!
//! assert_eq!(list.to_string(), "a -> b -> c -> None");
//! assert_eq!(
//!     list.insert_at(7, "x"),
//!     Err(SListError::PositionOutOfRange { position: 7, len: 3 })
//! );
//! ```

mod core;
mod error;
mod iter;

pub use crate::core::SList;
pub use crate::error::SListError;
pub use crate::iter::{IntoIter, Iter, IterMut};
