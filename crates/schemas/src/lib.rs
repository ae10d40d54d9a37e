//! Profile card data model
//!
//! This crate defines the document schema for a profile card: the two
//! subject record variants (fictional horse / original character), the
//! race result entry, and the deterministic defaults for a fresh
//! document.
//!
//! The model is purely structural. Validation lives in `umacard-editor`
//! and aggregation in `umacard-stats`; this crate only guarantees that a
//! document is always fully populated (every field present as a string)
//! and that serialization matches the external JSON document format.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod document;
pub mod prelude;
pub mod race;
pub mod records;

pub use document::{Mode, ProfileDocument};
pub use race::{RaceEntry, parse_int_text};
pub use records::{FictionalRecord, OriginalRecord};
