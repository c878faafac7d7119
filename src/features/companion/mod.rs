//! The animated study companion.
//!
//! Maps a situation (idle, urgent, break, stop, done) and the user's
//! chosen character to a line of encouragement. Pure reads of static
//! configuration plus a random draw; the companion holds no mutable state.

mod bank;
mod engine;
mod urgency;

pub use bank::{bank, Character, CharacterLines, DialogBank};
pub use engine::{speak, Situation};
pub use urgency::UrgencyMonitor;
