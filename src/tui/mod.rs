//! Terminal User Interface (TUI) for studypal.
//!
//! The interactive focus view: a Pomodoro countdown with the companion
//! character alongside it. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::CompanionConfig;
use crate::core::ThreadRandom;
use crate::error::StudyPalError;
use crate::features::pomodoro::SessionController;
use crate::features::profile::Profile;
use crate::features::quests::Quest;

/// Run the focus view.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(
    controller: SessionController,
    profile: &Profile,
    quests: Vec<Quest>,
    config: &CompanionConfig,
) -> Result<(), StudyPalError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| StudyPalError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| StudyPalError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| StudyPalError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(
        controller,
        profile.character,
        profile.name.clone(),
        quests,
        config,
        Box::new(ThreadRandom),
    );
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), StudyPalError> {
    loop {
        app.on_clock(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StudyPalError::Config(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            let now = Instant::now();
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle(now),
                event::Action::Reset => app.reset(),
                event::Action::SelectMode(mode) => app.select(mode),
                event::Action::Poke => app.poke(now),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
