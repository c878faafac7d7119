//! Event handling for the focus view.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::StudyPalError;
use crate::features::pomodoro::Mode;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    Toggle,
    /// Reset the whole cycle.
    Reset,
    /// Switch to a phase.
    SelectMode(Mode),
    /// Poke the companion for a line.
    Poke,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, StudyPalError> {
    // Poll with a small timeout so the clock in the draw loop keeps moving
    if event::poll(Duration::from_millis(100))
        .map_err(|e| StudyPalError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| StudyPalError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Timer controls
                KeyCode::Char(' ') | KeyCode::Enter => return Ok(Some(Action::Toggle)),
                KeyCode::Char('r') => return Ok(Some(Action::Reset)),

                // Phase selection
                KeyCode::Char('f') => return Ok(Some(Action::SelectMode(Mode::Focus))),
                KeyCode::Char('s') => return Ok(Some(Action::SelectMode(Mode::ShortBreak))),
                KeyCode::Char('l') => return Ok(Some(Action::SelectMode(Mode::LongBreak))),

                // Companion
                KeyCode::Char('c') => return Ok(Some(Action::Poke)),

                // Help
                KeyCode::Char('?') => {
                    app.status = Some(
                        "space:start/pause | f/s/l:phase | r:reset | c:chat | q:quit".to_string(),
                    );
                }

                _ => {}
            }
        }
    }

    Ok(None)
}
