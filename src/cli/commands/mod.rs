//! Command implementations for studypal.
//!
//! Each handler takes its parsed arguments and the output format and
//! returns the string to print, so the binary stays a thin dispatcher.

mod focus;
mod profile;
mod quest;
mod schedule;
mod shell;

pub use focus::focus;
pub use profile::{init, reset_all, say};
pub use quest::quest;
pub use schedule::schedule;
pub use shell::completions;
