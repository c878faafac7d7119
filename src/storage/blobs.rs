//! Key-value blob persistence.
//!
//! Everything studypal remembers between runs lives in three named JSON
//! blobs: the user profile, the class schedule, and the quest list. Each
//! blob is read once at startup and rewritten in full on every mutation;
//! no partial updates, no versioning. A malformed blob is treated as
//! absent so a corrupt value can never take the app down.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StudyPalError;
use crate::storage::Database;

/// Well-known blob keys.
pub mod keys {
    /// User profile (name, chosen character).
    pub const PROFILE: &str = "profile";
    /// Weekly class schedule entries.
    pub const SCHEDULE: &str = "schedule";
    /// Quest (task) list.
    pub const QUESTS: &str = "quests";
}

/// JSON blob store over the studypal database.
pub struct BlobStore {
    db: Database,
}

impl BlobStore {
    /// Open the blob store at the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, StudyPalError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a blob store over an existing database connection.
    #[must_use]
    pub fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Read and deserialize a blob.
    ///
    /// Returns `None` when the blob is missing or malformed; callers fall
    /// back to their default state in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying query fails.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StudyPalError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare("SELECT value FROM blobs WHERE key = ?1")
            .map_err(|e| StudyPalError::Storage(format!("Failed to prepare query: {e}")))?;

        let value: Option<String> = match stmt.query_row([key], |row| row.get(0)) {
            Ok(v) => Some(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => {
                return Err(StudyPalError::Storage(format!(
                    "Failed to read blob '{key}': {e}"
                )))
            }
        };

        // Malformed JSON degrades to "absent" rather than an error.
        Ok(value.and_then(|v| serde_json::from_str(&v).ok()))
    }

    /// Serialize and write a blob, replacing any previous value in full.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StudyPalError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StudyPalError::Parse(format!("Failed to serialize blob '{key}': {e}")))?;

        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![key, json, Utc::now().to_rfc3339()],
            )
            .map_err(|e| StudyPalError::Storage(format!("Failed to write blob '{key}': {e}")))?;

        Ok(())
    }

    /// Delete every stored blob. Used by `reset-all`.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> Result<(), StudyPalError> {
        self.db
            .connection()
            .execute("DELETE FROM blobs", [])
            .map_err(|e| StudyPalError::Storage(format!("Failed to clear blobs: {e}")))?;

        Ok(())
    }
}
