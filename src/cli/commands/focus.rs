//! Focus command: launch the interactive timer view.

use crate::cli::args::FocusArgs;
use crate::config::Config;
use crate::error::StudyPalError;
use crate::features::companion::Character;
use crate::features::pomodoro::{Mode, SessionController};
use crate::features::profile::Profile;
use crate::features::quests::QuestStore;
use crate::storage::BlobStore;
use crate::tui;

/// Launch the focus view, optionally pre-selecting a phase.
pub fn focus(args: &FocusArgs) -> Result<(), StudyPalError> {
    let config = Config::load()?;
    let blobs = BlobStore::open()?;
    let profile =
        Profile::load(&blobs)?.unwrap_or_else(|| Profile::new("friend", Character::default()));
    let quests = QuestStore::with_blobs(blobs)?.quests().to_vec();

    let mut controller = SessionController::new(&config.pomodoro);
    if let Some(ref mode) = args.mode {
        let mode = Mode::parse(mode).ok_or_else(|| {
            StudyPalError::Parse(format!("Unknown mode '{mode}' (focus, short, long)"))
        })?;
        controller.select_mode(mode);
    }

    tui::run(controller, &profile, quests, &config.companion)
}
