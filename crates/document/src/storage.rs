//! File-based document storage with atomic writes.
//!
//! Synchronous on purpose: the editor core is single-threaded and every
//! load or save is a discrete user action on one small file.

use std::fs;
use std::path::Path;

use tracing::debug;
use umacard_schemas::ProfileDocument;

use crate::codec::{deserialize, serialize};

/// Loads a document from a JSON file, applying the defaulting merge.
///
/// # Errors
///
/// [`crate::DocumentError::Io`] when the file cannot be read,
/// otherwise the errors of [`deserialize`].
pub fn load_document(path: &Path) -> crate::Result<ProfileDocument> {
    debug!(path = ?path, "loading document");
    let text = fs::read_to_string(path)?;
    deserialize(&text)
}

/// Saves a document as pretty-printed JSON.
///
/// Uses the atomic write pattern: the content goes to a temp file next
/// to the target, which is then renamed into place, so the original
/// file is never left partially overwritten.
///
/// # Errors
///
/// [`crate::DocumentError::Io`] when writing or renaming fails.
pub fn save_document(path: &Path, document: &ProfileDocument) -> crate::Result<()> {
    let text = serialize(document)?;
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, text)?;
    fs::rename(&temp_path, path)?;
    debug!(path = ?path, "document saved");
    Ok(())
}
