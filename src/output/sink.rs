//! Notification sink.
//!
//! The companion and the destructive commands talk to the user through
//! this trait so the front end can decide how messages appear: the CLI
//! prints them, the focus view shows a timed speech bubble, and tests
//! record them.

use std::io::{BufRead, Write};

use colored::Colorize;

/// Where user-facing notifications go.
pub trait NotificationSink {
    /// Display a transient message, already formatted for display.
    ///
    /// In the focus view this is the speech bubble: visible for the
    /// configured number of seconds, replaced (and its dismissal timer
    /// restarted) by any newer message. In the CLI it prints once and
    /// scrolls away.
    fn show_transient(&mut self, text: &str);

    /// Ask the user to confirm a destructive action.
    ///
    /// The caller runs the action exactly once on `true` and nothing on
    /// `false`.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Sink that prints to the terminal and reads confirmations from stdin.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn show_transient(&mut self, text: &str) {
        println!("{text}");
    }

    fn confirm(&mut self, message: &str) -> bool {
        print!("{} {} ", message.yellow().bold(), "[y/N]".dimmed());
        if std::io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Sink that records everything; answers confirmations with a preset
/// value. Used in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Transient messages shown, in order.
    pub transients: Vec<String>,
    /// Confirmation prompts shown, in order.
    pub prompts: Vec<String>,
    /// The answer given to every confirmation prompt.
    pub confirm_answer: bool,
}

impl RecordingSink {
    /// Create a recording sink that answers confirmations with `answer`.
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self {
            confirm_answer: answer,
            ..Self::default()
        }
    }
}

impl NotificationSink for RecordingSink {
    fn show_transient(&mut self, text: &str) {
        self.transients.push(text.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirm_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::answering(true);

        sink.show_transient("hello");
        assert!(sink.confirm("sure?"));

        assert_eq!(sink.transients, vec!["hello"]);
        assert_eq!(sink.prompts, vec!["sure?"]);
    }

    #[test]
    fn test_recording_sink_declines() {
        let mut sink = RecordingSink::answering(false);
        assert!(!sink.confirm("sure?"));
    }
}
