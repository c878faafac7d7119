//! Weekly class schedule.

mod store;
mod types;

pub use store::ScheduleStore;
pub use types::{Day, ScheduleEntry};
