//! Class schedule types.

use chrono::{NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Day of the week, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// Parse a day from a short or full English name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mon" | "monday" => Some(Self::Mon),
            "tue" | "tues" | "tuesday" => Some(Self::Tue),
            "wed" | "wednesday" => Some(Self::Wed),
            "thu" | "thur" | "thursday" => Some(Self::Thu),
            "fri" | "friday" => Some(Self::Fri),
            "sat" | "saturday" => Some(Self::Sat),
            "sun" | "sunday" => Some(Self::Sun),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A recurring weekly class slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Millisecond timestamp assigned at creation; doubles as the id.
    pub id: i64,
    /// Subject or class name.
    pub subject: String,
    /// Day of the week.
    pub day: Day,
    /// Start time.
    pub time: NaiveTime,
}

impl ScheduleEntry {
    /// Create a new schedule entry.
    #[must_use]
    pub fn new(subject: impl Into<String>, day: Day, time: NaiveTime) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            subject: subject.into(),
            day,
            time,
        }
    }
}
