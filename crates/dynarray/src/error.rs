//! Container error types.

use std::error::Error;
use std::fmt;

/// Bounds violations raised by indexed operations on a
/// [`DynamicArray`](crate::DynamicArray).
///
/// Only index misuse is an error. Operations whose natural outcome is
/// "nothing there" (`pop` on an empty array, `remove_item` with no match)
/// return `None` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// The last element was requested from an empty array.
    Empty,
    /// An element index at or past the logical length.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// An insertion index past the logical length. Insertion accepts
    /// `index == len` (append), so only `index > len` is rejected.
    InsertOutOfBounds {
        /// The requested insertion index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
}

impl IndexError {
    /// The offending index. `Empty` reports index 0.
    pub fn index(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::OutOfBounds { index, .. } | Self::InsertOutOfBounds { index, .. } => *index,
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "index 0 out of bounds: array is empty"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::InsertOutOfBounds { index, len } => {
                write!(f, "insertion index {index} out of bounds for length {len}")
            }
        }
    }
}

impl Error for IndexError {}
