//! Error type for queue operations

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `find_min` or `delete_min` was called on an empty queue
    Underflow,
    /// The task id is not present in the queue
    UnknownTask,
    /// The task id is already present in the queue
    DuplicateTask,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Underflow => write!(f, "operation on an empty queue"),
            QueueError::UnknownTask => write!(f, "task is not in the queue"),
            QueueError::DuplicateTask => write!(f, "task is already in the queue"),
        }
    }
}

impl std::error::Error for QueueError {}
