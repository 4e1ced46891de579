use thiserror::Error;

/// Error types for `SList` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SListError {
    /// Position is beyond the valid range for the operation
    #[error("Position out of range: {position} is beyond list length {len}")]
    PositionOutOfRange {
        /// Position that was requested
        position: usize,
        /// Length of the list at the time of the call
        len: usize,
    },
    /// Removal attempted on an empty list
    #[error("Operation on an empty list")]
    Empty,
}
