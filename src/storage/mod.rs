//! Storage layer for studypal.
//!
//! This module provides SQLite-backed persistence for the three blobs
//! studypal keeps between runs: profile, schedule, and quests.

mod blobs;
mod database;
mod migrations;

pub use blobs::{keys, BlobStore};
pub use database::Database;
