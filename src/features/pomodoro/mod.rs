//! Pomodoro focus timer.

mod session;

pub use session::{Mode, PhaseEnd, SessionController};
