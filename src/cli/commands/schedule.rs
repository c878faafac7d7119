//! Schedule command implementation.

use colored::Colorize;

use crate::cli::args::{OutputFormat, ScheduleCommands};
use crate::core::datetime::parse_time;
use crate::error::StudyPalError;
use crate::features::schedule::{Day, ScheduleEntry, ScheduleStore};
use crate::output::{format_schedule_pretty, to_json};

/// Execute schedule subcommands.
pub fn schedule(cmd: ScheduleCommands, format: OutputFormat) -> Result<String, StudyPalError> {
    let mut store = ScheduleStore::open()?;

    match cmd {
        ScheduleCommands::Add { subject, day, time } => {
            add_entry(&mut store, &subject, &day, &time, format)
        }
        ScheduleCommands::List => list_entries(&store, format),
        ScheduleCommands::Remove { id } => remove_entry(&mut store, id, format),
        ScheduleCommands::Clear => clear_entries(&mut store, format),
    }
}

/// Add a class to the schedule.
fn add_entry(
    store: &mut ScheduleStore,
    subject: &str,
    day: &str,
    time: &str,
    format: OutputFormat,
) -> Result<String, StudyPalError> {
    if subject.trim().is_empty() {
        return Err(StudyPalError::Parse("Subject is required".to_string()));
    }

    let day = Day::parse(day)
        .ok_or_else(|| StudyPalError::Parse(format!("Invalid day '{day}' (use mon..sun)")))?;
    let time = parse_time(time)?;

    let entry = store.add(ScheduleEntry::new(subject.trim(), day, time))?;

    match format {
        OutputFormat::Json => to_json(&entry),
        OutputFormat::Pretty => Ok(format!(
            "{} {} on {} at {}",
            "📚 Added".green(),
            entry.subject.bold(),
            entry.day,
            entry.time.format("%H:%M")
        )),
    }
}

/// List the schedule sorted by day then time.
fn list_entries(store: &ScheduleStore, format: OutputFormat) -> Result<String, StudyPalError> {
    let sorted = store.entries_sorted();

    match format {
        OutputFormat::Json => to_json(&sorted),
        OutputFormat::Pretty => Ok(format_schedule_pretty(&sorted)),
    }
}

/// Remove a schedule entry by id.
fn remove_entry(
    store: &mut ScheduleStore,
    id: i64,
    format: OutputFormat,
) -> Result<String, StudyPalError> {
    if !store.remove(id)? {
        return Err(StudyPalError::NotFound(format!(
            "No schedule entry with id {id}"
        )));
    }

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "removed": id })),
        OutputFormat::Pretty => Ok("Removed.".to_string()),
    }
}

/// Clear the whole schedule.
fn clear_entries(store: &mut ScheduleStore, format: OutputFormat) -> Result<String, StudyPalError> {
    let count = store.len();
    store.clear()?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "cleared": count })),
        OutputFormat::Pretty => Ok("Schedule cleared!".to_string()),
    }
}
