//! Error types for studypal.

use thiserror::Error;

/// Errors that can occur in studypal.
#[derive(Debug, Error)]
pub enum StudyPalError {
    /// Configuration or environment error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Failed to parse user input or serialized data.
    #[error("{0}")]
    Parse(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}
