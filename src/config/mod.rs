//! Configuration management for studypal.
//!
//! This module handles loading and saving configuration from `~/.studypal/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, CompanionConfig, Config, GeneralConfig, PomodoroConfig};
