//! Pretty output formatting for studypal.

use chrono::NaiveDateTime;
use colored::Colorize;

use crate::features::quests::Quest;
use crate::features::schedule::ScheduleEntry;

/// Format the quest list as a pretty table with countdowns.
#[must_use]
pub fn format_quests_pretty(quests: &[Quest], now: NaiveDateTime) -> String {
    if quests.is_empty() {
        return "Quest Log (0 quests)\n  No quests yet. Add one with: studypal quest add".to_string();
    }

    let mut output = format!("Quest Log ({} quests)\n", quests.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for quest in quests {
        let checkbox = if quest.completed {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let title = if quest.completed {
            quest.title.strikethrough().to_string()
        } else {
            quest.title.bold().to_string()
        };

        let countdown = quest.countdown(now);
        let countdown = if quest.completed {
            countdown.green().to_string()
        } else if countdown == "Overdue!" {
            countdown.red().bold().to_string()
        } else {
            countdown.yellow().to_string()
        };

        output.push_str(&format!(
            "{} {}  {}  {}\n",
            checkbox,
            title,
            countdown,
            format!("(id {})", quest.id).dimmed()
        ));
    }

    output
}

/// Format the weekly schedule as a pretty table (pre-sorted by caller).
#[must_use]
pub fn format_schedule_pretty(entries: &[&ScheduleEntry]) -> String {
    if entries.is_empty() {
        return "Weekly Schedule (0 classes)\n  Nothing scheduled. Add one with: studypal schedule add"
            .to_string();
    }

    let mut output = format!("Weekly Schedule ({} classes)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "{:<5} {:<7} {:<30} {}\n",
        "Day", "Time", "Subject", "Id"
    ));
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        output.push_str(&format!(
            "{:<5} {:<7} {:<30} {}\n",
            entry.day.to_string().cyan(),
            entry.time.format("%H:%M"),
            entry.subject.bold(),
            entry.id.to_string().dimmed()
        ));
    }

    output
}

/// Format a companion speech line as a bubble.
#[must_use]
pub fn format_bubble(glyph: &str, text: &str) -> String {
    format!("{} {}", glyph.cyan(), text.italic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::schedule::Day;
    use chrono::{NaiveDate, NaiveTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_quest_list() {
        let output = format_quests_pretty(&[], now());
        assert!(output.contains("0 quests"));
    }

    #[test]
    fn test_quest_table_has_countdown() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 11)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap();
        let quests = vec![Quest::new("Read chapter 4", due)];

        let output = format_quests_pretty(&quests, now());
        assert!(output.contains("Read chapter 4"));
        assert!(output.contains("1d 2h left"));
    }

    #[test]
    fn test_schedule_table() {
        let entry = ScheduleEntry::new(
            "Algebra",
            Day::Mon,
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        );
        let entries = vec![&entry];

        let output = format_schedule_pretty(&entries);
        assert!(output.contains("Algebra"));
        assert!(output.contains("09:30"));
        assert!(output.contains("Mon"));
    }

    #[test]
    fn test_bubble() {
        let bubble = format_bubble("(ᵔᴥᵔ)", "Keep going!");
        assert!(bubble.contains("Keep going!"));
    }
}
