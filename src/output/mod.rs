//! Output formatting and notification plumbing for studypal.

mod json;
mod pretty;
mod sink;

pub use json::to_json;
pub use pretty::{format_bubble, format_quests_pretty, format_schedule_pretty};
pub use sink::{NotificationSink, RecordingSink, TerminalSink};
