//! Feature modules for studypal.

pub mod companion;
pub mod pomodoro;
pub mod profile;
pub mod quests;
pub mod schedule;
