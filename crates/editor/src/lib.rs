//! Race list editing session
//!
//! This crate owns the only mutation path for a profile document: the
//! [`ProfileSession`] controller. It tracks the pending-operation state
//! machine (idle / editing / inserting), validates race entries on
//! commit, applies biography-field setters, and keeps the cached
//! career-total projections in sync with the race list.
//!
//! # Architecture
//!
//! - [`pending`]: the `PendingOp` state machine
//! - [`session`]: the `ProfileSession` document controller
//! - [`validate`]: race-entry validation, collecting all violations
//! - [`fields`]: typed biography field keys for the two record modes
//! - [`error`]: editor error types

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod fields;
pub mod pending;
pub mod session;
pub mod validate;

pub use error::EditorError;
pub use fields::{FictionalField, OriginalField};
pub use pending::PendingOp;
pub use session::ProfileSession;
pub use validate::{RaceEntryError, validate_entry};

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
