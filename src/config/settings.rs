//! Configuration settings for studypal.
//!
//! Settings are loaded from `~/.studypal/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::StudyPalError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Pomodoro timer settings.
    pub pomodoro: PomodoroConfig,
    /// Companion widget settings.
    pub companion: CompanionConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Pomodoro timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroConfig {
    /// Focus phase duration in minutes.
    #[serde(default = "default_focus_duration")]
    pub focus_minutes: u32,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of completed focus phases before a long break.
    #[serde(default = "default_cycles_until_long_break")]
    pub cycles_until_long_break: u32,
}

/// Companion widget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// How long a speech bubble stays on screen, in seconds.
    #[serde(default = "default_bubble_seconds")]
    pub bubble_seconds: u64,
    /// Probability that an urgency scan produces a reminder (0.0 - 1.0).
    #[serde(default = "default_urgency_probability")]
    pub urgency_probability: f64,
    /// Quests due within this many hours count as urgent.
    #[serde(default = "default_urgency_window")]
    pub urgency_window_hours: i64,
    /// Seconds between urgency scans in the focus view.
    #[serde(default = "default_urgency_scan_seconds")]
    pub urgency_scan_seconds: u64,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_duration() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_cycles_until_long_break() -> u32 {
    4
}

const fn default_bubble_seconds() -> u64 {
    5
}

const fn default_urgency_probability() -> f64 {
    0.3
}

const fn default_urgency_window() -> i64 {
    24
}

const fn default_urgency_scan_seconds() -> u64 {
    60
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_duration(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            cycles_until_long_break: default_cycles_until_long_break(),
        }
    }
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            bubble_seconds: default_bubble_seconds(),
            urgency_probability: default_urgency_probability(),
            urgency_window_hours: default_urgency_window(),
            urgency_scan_seconds: default_urgency_scan_seconds(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, StudyPalError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, StudyPalError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            StudyPalError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            StudyPalError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), StudyPalError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), StudyPalError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| StudyPalError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            StudyPalError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.pomodoro.focus_minutes, 25);
        assert_eq!(config.pomodoro.short_break_minutes, 5);
        assert_eq!(config.pomodoro.long_break_minutes, 15);
        assert_eq!(config.pomodoro.cycles_until_long_break, 4);
        assert_eq!(config.companion.bubble_seconds, 5);
        assert!((config.companion.urgency_probability - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.pomodoro.focus_minutes, 25);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.pomodoro.focus_minutes = 50;
        config.companion.bubble_seconds = 8;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.pomodoro.focus_minutes, 50);
        assert_eq!(loaded.companion.bubble_seconds, 8);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
pomodoro:
  focus_minutes: 45
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.pomodoro.focus_minutes, 45);
        // Defaults should be used for missing fields
        assert_eq!(config.pomodoro.short_break_minutes, 5);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }
}
