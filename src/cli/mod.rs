//! Command-line interface for studypal.

pub mod args;
pub mod commands;
