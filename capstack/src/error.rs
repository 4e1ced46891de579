use thiserror::Error;

/// Error types for `CapStack` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CapStackError {
    /// Push attempted on a full stack; the stack is left unchanged
    #[error("Stack overflow: capacity of {capacity} elements reached")]
    Overflow {
        /// Fixed capacity of the stack
        capacity: usize,
    },
    /// Pop or peek attempted on an empty stack
    #[error("Stack underflow: the stack is empty")]
    Underflow,
    /// Invalid capacity provided to `CapStack::new`
    #[error("Invalid capacity: {capacity}")]
    InvalidCapacity {
        /// Capacity that was rejected
        capacity: usize,
    },
}
