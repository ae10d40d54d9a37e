//! JSON encoding and the defaulting merge.

use serde_json::Value;
use umacard_schemas::ProfileDocument;

use crate::error::DocumentError;

/// Serializes a document to pretty-printed JSON (two-space indent), a
/// direct structural dump with no field omission.
///
/// # Errors
///
/// Propagates `serde_json` failures; structurally a `ProfileDocument`
/// always serializes.
pub fn serialize(document: &ProfileDocument) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Reconstructs a document from untrusted JSON text.
///
/// The parsed object is merged shallowly over a default document at the
/// top level: each of `mode`, `fictional`, `original`, `races` replaces
/// the default wholesale when present; absent keys keep their defaults.
/// Unknown top-level keys are ignored. Nested record fields are not
/// individually defaulted to the documented select values when the
/// parent key is present but incomplete; they load as empty strings
/// (the format's historical shallow-merge contract). Race entries get
/// `prize`/`fans` defaulted to `"0"`, with loaded values winning.
///
/// # Errors
///
/// [`DocumentError::Parse`] on malformed JSON or a present key that
/// does not fit its schema, [`DocumentError::NotAnObject`] when the
/// root is not an object. Failure yields no partial result.
pub fn deserialize(text: &str) -> crate::Result<ProfileDocument> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(map) = value else {
        return Err(DocumentError::NotAnObject);
    };

    let mut document = ProfileDocument::default();
    if let Some(mode) = map.get("mode") {
        document.mode = serde_json::from_value(mode.clone())?;
    }
    if let Some(fictional) = map.get("fictional") {
        document.fictional = serde_json::from_value(fictional.clone())?;
    }
    if let Some(original) = map.get("original") {
        document.original = serde_json::from_value(original.clone())?;
    }
    if let Some(races) = map.get("races") {
        document.races = serde_json::from_value(races.clone())?;
    }
    Ok(document)
}
