//! Error types for mock-session.
//!
//! Session operations themselves never fail. These errors come from fixture
//! configuration loading, session id parsing and typed attribute access.

use thiserror::Error;

/// Main error type for mock-session operations.
#[derive(Error, Debug)]
pub enum MockSessionError {
    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for the expected shape.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// A session id string could not be parsed.
    #[error("invalid session id: {0:?}")]
    InvalidSessionId(String),

    /// An attribute exists but holds a value of another type.
    #[error("attribute {name:?} holds {actual}, not {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Convenience Result type for mock-session operations.
pub type Result<T> = std::result::Result<T, MockSessionError>;
