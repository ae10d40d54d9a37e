//! Document lifecycle for umacard
//!
//! Serialization of a profile document to the external JSON format,
//! reconstruction from untrusted JSON with the defaulting merge, export
//! file naming, and synchronous file storage with atomic writes.
//!
//! # Error Recovery
//!
//! `deserialize` is a pure function: a malformed input yields an error
//! and no partial result, so the caller's current document is never
//! disturbed by a failed load. File writes go to a temp file first and
//! are renamed into place.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod codec;
pub mod error;
pub mod export;
pub mod storage;

pub use codec::{deserialize, serialize};
pub use error::DocumentError;
pub use export::{ExportRegion, document_file_name, image_file_name};
pub use storage::{load_document, save_document};

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
