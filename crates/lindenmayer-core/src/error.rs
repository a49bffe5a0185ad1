//! Error types for the rewriting engine.

use thiserror::Error;

/// Result type alias for L-system operations.
pub type LSystemResult<T> = Result<T, LSystemError>;

/// Errors that can occur while configuring an L-system.
#[derive(Debug, Error)]
pub enum LSystemError {
    /// Rule tokens could not be grouped into predecessor/successor pairs.
    #[error("odd argument count: {count} (rules must be given as predecessor/successor pairs)")]
    InvalidArgumentCount { count: usize },

    /// A textual rule had no `=` separating predecessor and successor.
    #[error("malformed rule {input:?}: expected PREDECESSOR=SUCCESSOR")]
    MalformedRule { input: String },

    /// Description serialization/deserialization error.
    #[error("description serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (file operations).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
