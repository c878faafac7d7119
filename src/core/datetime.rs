//! Date and time helpers for quest deadlines and timer display.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::StudyPalError;

/// Default due time when a quest is added without one (end of day).
pub const DEFAULT_DUE_HOUR: u32 = 23;
/// Default due minute.
pub const DEFAULT_DUE_MINUTE: u32 = 59;

/// Parse a quest due date (`YYYY-MM-DD`) with an optional `HH:MM` time.
///
/// A quest without an explicit time is due at 23:59 that day.
///
/// # Errors
///
/// Returns `StudyPalError::Parse` if the date or time is malformed.
pub fn parse_due(date: &str, time: Option<&str>) -> Result<NaiveDateTime, StudyPalError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| StudyPalError::Parse(format!("Invalid due date '{date}': {e}")))?;

    let time = match time {
        Some(t) => parse_time(t)?,
        None => end_of_day(),
    };

    Ok(NaiveDateTime::new(date, time))
}

/// Parse an `HH:MM` time of day.
///
/// # Errors
///
/// Returns `StudyPalError::Parse` if the time is malformed.
pub fn parse_time(input: &str) -> Result<NaiveTime, StudyPalError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|e| StudyPalError::Parse(format!("Invalid time '{input}': {e}")))
}

/// 23:59, the implicit deadline for date-only quests.
#[must_use]
pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_DUE_HOUR, DEFAULT_DUE_MINUTE, 0).unwrap_or_default()
}

/// Format how long remains until `due` as a countdown string.
///
/// Past-due items render as `Overdue!`; everything else as `Nd Nh left`.
#[must_use]
pub fn format_time_left(due: NaiveDateTime, now: NaiveDateTime) -> String {
    let left = due - now;
    if left <= Duration::zero() {
        return "Overdue!".to_string();
    }

    let days = left.num_days();
    let hours = (left - Duration::days(days)).num_hours();
    format!("{days}d {hours}h left")
}

/// Format a second count as `MM:SS`.
#[must_use]
pub fn format_mmss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
