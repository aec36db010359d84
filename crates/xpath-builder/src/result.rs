//! Result and error types for the XPath builder.

use thiserror::Error;

/// Result type for builder operations
pub type XPathResult<T> = Result<T, XPathError>;

/// Errors that can occur while building a path
#[derive(Debug, Error)]
pub enum XPathError {
    /// `back()`/`up()` found no segment carrying a predicate clause
    #[error("No segment with predicates to remove in path '{path}'")]
    NoRemovableSegment {
        /// Path at the time of the call
        path: String,
    },

    /// Name is not part of the fixed component vocabulary
    #[error("Unknown component type: {name}")]
    UnknownComponentType {
        /// Name that failed to parse
        name: String,
    },

    /// Configuration document was rejected
    #[error("Invalid builder configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
