//! Error types for the Respell library.
//!
//! All fallible operations return [`Result`], which wraps [`RespellError`].
//! The only failure modes in the crate are external: reading a corpus or a
//! fixture file, and parsing fixture JSON. Correction itself is total and
//! never fails.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Respell operations.
#[derive(Error, Debug)]
pub enum RespellError {
    /// I/O errors (corpus or fixture files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Fixture-related errors (malformed labeled test data)
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RespellError.
pub type Result<T> = std::result::Result<T, RespellError>;

impl RespellError {
    /// Create a new fixture error.
    pub fn fixture<S: Into<String>>(msg: S) -> Self {
        RespellError::Fixture(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        RespellError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RespellError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RespellError::fixture("Test fixture error");
        assert_eq!(error.to_string(), "Fixture error: Test fixture error");

        let error = RespellError::invalid_operation("Test op error");
        assert_eq!(error.to_string(), "Invalid operation: Test op error");

        let error = RespellError::other("Test other error");
        assert_eq!(error.to_string(), "Error: Test other error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let respell_error = RespellError::from(io_error);

        match respell_error {
            RespellError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
