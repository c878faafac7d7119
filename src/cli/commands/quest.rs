//! Quest command implementation.

use chrono::Local;
use colored::Colorize;

use crate::cli::args::{OutputFormat, QuestCommands};
use crate::core::datetime::parse_due;
use crate::core::ThreadRandom;
use crate::error::StudyPalError;
use crate::features::companion::{speak, Character, Situation};
use crate::features::profile::Profile;
use crate::features::quests::{Quest, QuestStore};
use crate::output::{format_bubble, format_quests_pretty, to_json, NotificationSink};
use crate::storage::BlobStore;

/// Execute quest subcommands.
pub fn quest(
    cmd: QuestCommands,
    sink: &mut dyn NotificationSink,
    format: OutputFormat,
) -> Result<String, StudyPalError> {
    // The profile is only consulted to pick the companion's voice; a
    // missing profile degrades to the default character.
    let character = Profile::load(&BlobStore::open()?)?
        .map(|p| p.character)
        .unwrap_or_default();
    let mut store = QuestStore::open()?;

    match cmd {
        QuestCommands::Add { title, due, time } => {
            add_quest(&mut store, &title, &due, time.as_deref(), format)
        }
        QuestCommands::List => list_quests(&store, format),
        QuestCommands::Done { id } => toggle_quest(&mut store, id, character, sink, format),
        QuestCommands::Clear => clear_completed(&mut store, format),
    }
}

/// Add a new quest.
fn add_quest(
    store: &mut QuestStore,
    title: &str,
    due: &str,
    time: Option<&str>,
    format: OutputFormat,
) -> Result<String, StudyPalError> {
    if title.trim().is_empty() {
        return Err(StudyPalError::Parse(
            "Quest description is required".to_string(),
        ));
    }

    let due = parse_due(due, time)?;
    let quest = store.add(Quest::new(title.trim(), due))?;

    match format {
        OutputFormat::Json => to_json(&quest),
        OutputFormat::Pretty => Ok(format!(
            "{} {}\n   Due: {}",
            "🗡️ New quest accepted:".green(),
            quest.title.bold(),
            quest.due.format("%Y-%m-%d %H:%M")
        )),
    }
}

/// List all quests with countdowns.
fn list_quests(store: &QuestStore, format: OutputFormat) -> Result<String, StudyPalError> {
    match format {
        OutputFormat::Json => to_json(&store.quests()),
        OutputFormat::Pretty => Ok(format_quests_pretty(
            store.quests(),
            Local::now().naive_local(),
        )),
    }
}

/// Toggle a quest's completed state; completing one earns a reward line
/// spoken through the notification sink.
fn toggle_quest(
    store: &mut QuestStore,
    id: i64,
    character: Character,
    sink: &mut dyn NotificationSink,
    format: OutputFormat,
) -> Result<String, StudyPalError> {
    let Some(quest) = store.toggle(id)? else {
        return Err(StudyPalError::NotFound(format!("No quest with id {id}")));
    };

    match format {
        OutputFormat::Json => to_json(&quest),
        OutputFormat::Pretty => {
            if quest.completed {
                let line = speak(character, Situation::Done, &mut ThreadRandom);
                sink.show_transient(&format_bubble(character.glyph(), line));
                Ok(format!(
                    "{} {}",
                    "✅ Quest complete:".green(),
                    quest.title.bold()
                ))
            } else {
                Ok(format!("↩️  Quest reopened: {}", quest.title.bold()))
            }
        }
    }
}

/// Remove all completed quests.
fn clear_completed(store: &mut QuestStore, format: OutputFormat) -> Result<String, StudyPalError> {
    let cleared = store.clear_completed()?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "cleared": cleared })),
        OutputFormat::Pretty => Ok(format!(
            "Cleared {cleared} completed quest{}.",
            if cleared == 1 { "" } else { "s" }
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::RecordingSink;
    use crate::storage::Database;

    fn store() -> QuestStore {
        let blobs = BlobStore::with_database(Database::open_in_memory().unwrap());
        QuestStore::with_blobs(blobs).unwrap()
    }

    #[test]
    fn test_add_then_list() {
        let mut store = store();

        add_quest(
            &mut store,
            "Finish essay",
            "2030-06-01",
            None,
            OutputFormat::Pretty,
        )
        .unwrap();

        let listing = list_quests(&store, OutputFormat::Pretty).unwrap();
        assert!(listing.contains("Finish essay"));
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let mut store = store();
        let result = add_quest(&mut store, "  ", "2030-06-01", None, OutputFormat::Pretty);
        assert!(result.is_err());
    }

    #[test]
    fn test_toggle_speaks_reward_line_through_sink() {
        let mut store = store();
        let mut sink = RecordingSink::answering(false);
        add_quest(
            &mut store,
            "Finish essay",
            "2030-06-01",
            None,
            OutputFormat::Pretty,
        )
        .unwrap();
        let id = store.quests()[0].id;

        let output =
            toggle_quest(&mut store, id, Character::Pip, &mut sink, OutputFormat::Pretty).unwrap();

        assert!(output.contains("Quest complete"));
        assert_eq!(sink.transients.len(), 1);
        assert!(sink.transients[0].contains("Quest Complete! +10 EXP! Great job!"));

        // Reopening speaks nothing.
        toggle_quest(&mut store, id, Character::Pip, &mut sink, OutputFormat::Pretty).unwrap();
        assert_eq!(sink.transients.len(), 1);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut store = store();
        let mut sink = RecordingSink::answering(false);
        let result = toggle_quest(&mut store, 99, Character::Pip, &mut sink, OutputFormat::Pretty);
        assert!(matches!(result, Err(StudyPalError::NotFound(_))));
    }
}
