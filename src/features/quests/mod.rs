//! Quest (task) list.

mod store;
mod types;

pub use store::QuestStore;
pub use types::Quest;
