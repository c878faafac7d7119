//! Path resolution for studypal configuration and data files.
//!
//! All studypal data is stored in `~/.studypal/`:
//! - `config.yaml` - Main configuration file
//! - `studypal.db` - SQLite database holding the persisted blobs

use std::path::PathBuf;

use crate::error::StudyPalError;

/// Paths to studypal configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.studypal/`
    pub root: PathBuf,
    /// Config file: `~/.studypal/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.studypal/studypal.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StudyPalError> {
        let home = std::env::var("HOME")
            .map_err(|_| StudyPalError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".studypal");

        Ok(Self {
            config_file: root.join("config.yaml"),
            database: root.join("studypal.db"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("studypal.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), StudyPalError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                StudyPalError::Config(format!("Failed to create directory {:?}: {}", self.root, e))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".studypal"))
        })
    }
}
