//! Quest types.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::datetime::format_time_left;
use crate::core::DueDated;

/// A quest: a task with a deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Millisecond timestamp assigned at creation; doubles as the id.
    pub id: i64,
    /// What needs doing.
    pub title: String,
    /// When it is due (local naive datetime; 23:59 when no time given).
    pub due: NaiveDateTime,
    /// Whether the quest has been completed.
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    /// Create a new open quest due at the given time.
    #[must_use]
    pub fn new(title: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            title: title.into(),
            due,
            completed: false,
        }
    }

    /// Countdown text for display: `DONE`, `Overdue!`, or `Nd Nh left`.
    #[must_use]
    pub fn countdown(&self, now: NaiveDateTime) -> String {
        if self.completed {
            "DONE".to_string()
        } else {
            format_time_left(self.due, now)
        }
    }
}

impl DueDated for Quest {
    fn due_at(&self) -> NaiveDateTime {
        self.due
    }

    fn is_open(&self) -> bool {
        !self.completed
    }
}
