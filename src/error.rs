//! Error types for the layout and serialization pipeline.
//!
//! Valid content never produces an error: malformed blocks degrade to
//! rendering nothing. The only failures are invalid page geometry,
//! an inconsistent object graph, and I/O when persisting the output.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while laying out or serializing a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Page geometry cannot hold any content
    #[error("Invalid page geometry: {0}")]
    Layout(String),

    /// Object graph is inconsistent (dangling reference, id gap)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content model JSON could not be decoded
    #[error("Invalid content model: {0}")]
    Json(#[from] serde_json::Error),
}
