//! Profile commands: onboarding, poking the companion, and reset-all.

use colored::Colorize;

use crate::cli::args::{InitArgs, OutputFormat, ResetAllArgs};
use crate::core::{RandomSource, ThreadRandom};
use crate::error::StudyPalError;
use crate::features::companion::{speak, Character, Situation};
use crate::features::profile::Profile;
use crate::output::{format_bubble, to_json, NotificationSink};
use crate::storage::BlobStore;

/// Onboard: create (or replace) the user profile.
pub fn init(args: InitArgs, format: OutputFormat) -> Result<String, StudyPalError> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(StudyPalError::Parse("Please enter your name!".to_string()));
    }

    let character = Character::parse(&args.character).ok_or_else(|| {
        StudyPalError::Parse(format!(
            "Unknown character '{}' (try pip, nova, or mochi)",
            args.character
        ))
    })?;

    let blobs = BlobStore::open()?;
    let profile = Profile::new(name, character);
    profile.save(&blobs)?;

    match format {
        OutputFormat::Json => to_json(&profile),
        OutputFormat::Pretty => {
            let line = format!("Let's do this, {name}!");
            Ok(format!(
                "{} {} {}\n{}",
                "WELCOME,".bold(),
                name.to_uppercase().bold(),
                format!("- you're teamed up with {character}!").cyan(),
                format_bubble(character.glyph(), &line)
            ))
        }
    }
}

/// Poke the companion for an idle encouragement line.
pub fn say(
    sink: &mut dyn NotificationSink,
    format: OutputFormat,
) -> Result<String, StudyPalError> {
    let character = Profile::load(&BlobStore::open()?)?
        .map(|p| p.character)
        .unwrap_or_default();
    say_with(character, sink, &mut ThreadRandom, format)
}

fn say_with(
    character: Character,
    sink: &mut dyn NotificationSink,
    rng: &mut dyn RandomSource,
    format: OutputFormat,
) -> Result<String, StudyPalError> {
    let line = speak(character, Situation::Idle, rng);

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "character": character.display_name(),
            "text": line,
        })),
        OutputFormat::Pretty => {
            sink.show_transient(&format_bubble(character.glyph(), line));
            Ok(String::new())
        }
    }
}

/// Erase every stored blob, behind a confirmation prompt.
pub fn reset_all(
    args: &ResetAllArgs,
    sink: &mut dyn NotificationSink,
    format: OutputFormat,
) -> Result<String, StudyPalError> {
    if !args.force
        && !sink.confirm("Are you sure you want to reset EVERYTHING? All data will be lost!")
    {
        return Ok("Aborted. Nothing was deleted.".to_string());
    }

    BlobStore::open()?.clear()?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "reset": true })),
        OutputFormat::Pretty => Ok("All studypal data erased. See you at onboarding!".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedRandom;
    use crate::output::RecordingSink;

    #[test]
    fn test_say_goes_through_the_sink() {
        let mut sink = RecordingSink::answering(false);

        let output = say_with(
            Character::Pip,
            &mut sink,
            &mut FixedRandom(0.0),
            OutputFormat::Pretty,
        )
        .unwrap();

        assert!(output.is_empty());
        assert_eq!(sink.transients.len(), 1);
        assert!(sink.transients[0].contains("Keep going!"));
    }

    #[test]
    fn test_say_json_skips_the_sink() {
        let mut sink = RecordingSink::answering(false);

        let output = say_with(
            Character::Nova,
            &mut sink,
            &mut FixedRandom(0.0),
            OutputFormat::Json,
        )
        .unwrap();

        assert!(output.contains("Nova"));
        assert!(sink.transients.is_empty());
    }

    #[test]
    fn test_init_rejects_empty_name() {
        let args = InitArgs {
            name: "   ".to_string(),
            character: "pip".to_string(),
        };
        assert!(init(args, OutputFormat::Pretty).is_err());
    }

    #[test]
    fn test_init_rejects_unknown_character() {
        let args = InitArgs {
            name: "Robin".to_string(),
            character: "dragon".to_string(),
        };
        assert!(init(args, OutputFormat::Pretty).is_err());
    }

    #[test]
    fn test_reset_all_declined_deletes_nothing() {
        let args = ResetAllArgs { force: false };
        let mut sink = RecordingSink::answering(false);

        let output = reset_all(&args, &mut sink, OutputFormat::Pretty).unwrap();

        assert!(output.contains("Aborted"));
        assert_eq!(sink.prompts.len(), 1);
    }
}
