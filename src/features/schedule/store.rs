//! Schedule storage.
//!
//! The weekly schedule lives in the `schedule` blob, rewritten in full on
//! every mutation.

use crate::error::StudyPalError;
use crate::storage::{keys, BlobStore};

use super::ScheduleEntry;

/// Blob-backed weekly schedule.
pub struct ScheduleStore {
    blobs: BlobStore,
    entries: Vec<ScheduleEntry>,
}

impl ScheduleStore {
    /// Open the store at the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, StudyPalError> {
        Self::with_blobs(BlobStore::open()?)
    }

    /// Create a store over an existing blob store (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the blob read fails.
    pub fn with_blobs(blobs: BlobStore) -> Result<Self, StudyPalError> {
        let entries = blobs.get(keys::SCHEDULE)?.unwrap_or_default();
        Ok(Self { blobs, entries })
    }

    /// All entries sorted by day, then start time.
    #[must_use]
    pub fn entries_sorted(&self) -> Vec<&ScheduleEntry> {
        let mut entries: Vec<&ScheduleEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.day.cmp(&b.day).then(a.time.cmp(&b.time)));
        entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry, returning it once persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn add(&mut self, entry: ScheduleEntry) -> Result<ScheduleEntry, StudyPalError> {
        self.entries.push(entry.clone());
        self.save()?;
        Ok(entry)
    }

    /// Remove an entry by id. Returns `false` if no entry has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn remove(&mut self, id: i64) -> Result<bool, StudyPalError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Remove every entry.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn clear(&mut self) -> Result<(), StudyPalError> {
        self.entries.clear();
        self.save()
    }

    /// Rewrite the whole blob.
    fn save(&self) -> Result<(), StudyPalError> {
        self.blobs.put(keys::SCHEDULE, &self.entries)
    }
}
