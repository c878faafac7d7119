//! Quest storage.
//!
//! The quest list lives in the `quests` blob: loaded once when the store
//! opens, rewritten in full after every mutation.

use crate::error::StudyPalError;
use crate::storage::{keys, BlobStore};

use super::Quest;

/// Blob-backed quest list.
pub struct QuestStore {
    blobs: BlobStore,
    quests: Vec<Quest>,
}

impl QuestStore {
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
        let quests = blobs.get(keys::QUESTS)?.unwrap_or_default();
        Ok(Self { blobs, quests })
    }

    /// All quests, in insertion order.
    #[must_use]
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Add a quest, returning it once persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn add(&mut self, quest: Quest) -> Result<Quest, StudyPalError> {
        self.quests.push(quest.clone());
        self.save()?;
        Ok(quest)
    }

    /// Toggle a quest's completed flag.
    ///
    /// Returns the quest's new state, or `None` if no quest has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn toggle(&mut self, id: i64) -> Result<Option<&Quest>, StudyPalError> {
        let Some(index) = self.quests.iter().position(|q| q.id == id) else {
            return Ok(None);
        };

        self.quests[index].completed = !self.quests[index].completed;
        self.save()?;
        Ok(self.quests.get(index))
    }

    /// Remove all completed quests. Returns how many were cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn clear_completed(&mut self) -> Result<usize, StudyPalError> {
        let before = self.quests.len();
        self.quests.retain(|q| !q.completed);
        self.save()?;
        Ok(before - self.quests.len())
    }

    /// Rewrite the whole blob.
    fn save(&self) -> Result<(), StudyPalError> {
        self.blobs.put(keys::QUESTS, &self.quests)
    }
}
