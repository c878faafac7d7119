//! JSON output formatting for studypal.

use serde::Serialize;

use crate::error::StudyPalError;

/// Serialize any value to pretty-printed JSON.
///
/// # Errors
///
/// Returns `StudyPalError::Parse` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StudyPalError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| StudyPalError::Parse(format!("Failed to serialize to JSON: {e}")))
}
