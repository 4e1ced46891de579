//! `DList`: a doubly linked list traversable in both directions.
//!
//! Nodes live in an arena and link to each other by slot index; the
//! backward link is a non-owning index used only for reverse traversal.
//!
//! ```
//! use dlist::DList;
//!
//! let mut list = DList::new();
//! for value in [10, 20, 30, 40, 50] {
//!     list.push_back(value);
//! }
//!
//! let forward: Vec<i32> = list.iter().copied().collect();
//! let backward: Vec<i32> = list.iter_rev().copied().collect();
//!
//! assert_eq!(forward, vec![10, 20, 30, 40, 50]);
//! assert_eq!(backward, vec![50, 40, 30, 20, 10]);
//! assert!(list.is_consistent());
//! ```

mod core;
mod iter;

pub use crate::core::DList;
pub use crate::iter::{DListIter, DListRevIter};
