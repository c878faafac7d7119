//! User profile: the name and companion character chosen at onboarding.

use serde::{Deserialize, Serialize};

use crate::error::StudyPalError;
use crate::features::companion::Character;
use crate::storage::{keys, BlobStore};

/// The onboarded user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The user's name.
    pub name: String,
    /// Chosen companion character. Unrecognized stored values fall back to
    /// the default character rather than failing the whole profile.
    #[serde(default)]
    pub character: Character,
}

impl Profile {
    /// Create a profile.
    #[must_use]
    pub fn new(name: impl Into<String>, character: Character) -> Self {
        Self {
            name: name.into(),
            character,
        }
    }

    /// Load the profile blob. Missing or malformed blobs yield `None`;
    /// the caller treats that as "not onboarded yet".
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying read fails.
    pub fn load(blobs: &BlobStore) -> Result<Option<Self>, StudyPalError> {
        blobs.get(keys::PROFILE)
    }

    /// Persist the profile blob in full.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save(&self, blobs: &BlobStore) -> Result<(), StudyPalError> {
        blobs.put(keys::PROFILE, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    fn blobs() -> BlobStore {
        BlobStore::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_load_missing_profile() {
        assert!(Profile::load(&blobs()).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let blobs = blobs();
        Profile::new("Robin", Character::Nova).save(&blobs).unwrap();

        let loaded = Profile::load(&blobs).unwrap().unwrap();
        assert_eq!(loaded.name, "Robin");
        assert_eq!(loaded.character, Character::Nova);
    }

    #[test]
    fn test_profile_without_character_gets_default() {
        // Legacy blobs may predate the character field.
        let blobs = blobs();
        blobs
            .put(keys::PROFILE, &serde_json::json!({ "name": "Robin" }))
            .unwrap();

        let loaded = Profile::load(&blobs).unwrap().unwrap();
        assert_eq!(loaded.character, Character::Pip);
    }
}
