//! Editor error types.

use crate::validate::{RaceEntryError, join_messages};

/// Errors returned by [`ProfileSession`](crate::ProfileSession) operations.
///
/// Nothing here is fatal: validation failures leave the document and
/// pending state untouched, and out-of-range indices fail loudly
/// instead of corrupting the race list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// One or more race-entry fields failed validation.
    #[error("invalid race entry: {}", join_messages(.0))]
    Validation(Vec<RaceEntryError>),

    /// A race-list index was out of range.
    #[error("race index {index} is out of range (list has {len} entries)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Race list length at the time of the call.
        len: usize,
    },
}

impl EditorError {
    /// The violation list, when this is a validation error.
    pub fn violations(&self) -> Option<&[RaceEntryError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}
