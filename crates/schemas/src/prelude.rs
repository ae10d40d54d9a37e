//! Convenience re-exports for common types

pub use crate::document::{Mode, ProfileDocument};
pub use crate::race::{RaceEntry, parse_int_text};
pub use crate::records::{
    DEFAULT_EAR, DEFAULT_SCHOOL_GRADE, DEFAULT_TRAINING_CENTER, FictionalRecord, OriginalRecord,
};
