//! Error types for document operations.

/// Errors that can occur while loading, saving, or parsing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The input was not syntactically valid JSON, or a present key did
    /// not fit its schema.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top level of the input was valid JSON but not an object.
    #[error("document root must be a JSON object")]
    NotAnObject,

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
