//! The companion dialog bank.
//!
//! Static configuration: three characters, each with a line (or a set of
//! candidate lines) for every situation. Loaded once, never mutated.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Situation;

/// A companion character identity, chosen once at onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    /// Cheerful sprout. Stale or unrecognized profile values fall back here.
    #[default]
    Pip,
    /// Cool-headed star cat.
    Nova,
    /// Cozy rice spirit.
    Mochi,
}

// Hand-written so an unrecognized identity in a stored blob degrades to
// the default character instead of failing the whole profile read.
impl<'de> Deserialize<'de> for Character {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name).unwrap_or_default())
    }
}

impl Character {
    /// All characters, in definition order.
    pub const ALL: [Self; 3] = [Self::Pip, Self::Nova, Self::Mochi];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Pip => "Pip",
            Self::Nova => "Nova",
            Self::Mochi => "Mochi",
        }
    }

    /// The character's widget sprite, terminal edition.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Pip => "(ᵔᴥᵔ)",
            Self::Nova => "(=ↀωↀ=)",
            Self::Mochi => "(・ω・)",
        }
    }

    /// Parse a character from a user-facing name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pip" => Some(Self::Pip),
            "nova" => Some(Self::Nova),
            "mochi" => Some(Self::Mochi),
            _ => None,
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One character's lines, one entry per situation.
///
/// The struct shape guarantees every character covers all five situations;
/// `done` is always a single fixed line.
#[derive(Debug)]
pub struct CharacterLines {
    /// Encouragement when idle or poked.
    pub idle: &'static [&'static str],
    /// Reminder when quests are due soon.
    pub urgent: &'static [&'static str],
    /// Celebration when a focus phase ends.
    pub break_time: &'static [&'static str],
    /// Reaction to pausing the timer.
    pub stop: &'static [&'static str],
    /// Quest-complete reward line.
    pub done: &'static str,
}

/// The full dialog bank: characters in definition order with their lines.
#[derive(Debug)]
pub struct DialogBank {
    entries: Vec<(Character, CharacterLines)>,
}

impl DialogBank {
    /// Look up a character's lines, falling back to the first defined
    /// character when the identity is missing from the bank.
    #[must_use]
    pub fn lines(&self, character: Character) -> &CharacterLines {
        self.entries
            .iter()
            .find(|(c, _)| *c == character)
            .or_else(|| self.entries.first())
            .map(|(_, lines)| lines)
            .unwrap_or(&FALLBACK_LINES)
    }

    /// The candidate lines for a situation. The slice borrows from the
    /// bank but the lines themselves are `'static`.
    #[must_use]
    pub fn candidates(&self, character: Character, situation: Situation) -> &[&'static str] {
        let lines = self.lines(character);
        match situation {
            Situation::Idle => lines.idle,
            Situation::Urgent => lines.urgent,
            Situation::Break => lines.break_time,
            Situation::Stop => lines.stop,
            Situation::Done => std::slice::from_ref(&lines.done),
        }
    }
}

/// Lines used only if the bank were somehow empty; keeps lookup total.
static FALLBACK_LINES: CharacterLines = CharacterLines {
    idle: &["Keep going!"],
    urgent: &["You have quests due soon!"],
    break_time: &["Time's up! Good focus!"],
    stop: &["Taking a breather?"],
    done: "Quest Complete! +10 EXP! Great job!",
};

static BANK: Lazy<DialogBank> = Lazy::new(|| DialogBank {
    entries: vec![
        (
            Character::Pip,
            CharacterLines {
                idle: &[
                    "Keep going!",
                    "You can do this!",
                    "Don't forget to hydrate!",
                    "Focus mode: ON",
                    "Believe in yourself!",
                ],
                urgent: &[
                    "You have quests due soon!",
                    "Tick tock - a quest deadline is sneaking up!",
                ],
                break_time: &[
                    "Time's up! Good focus!",
                    "Phew! Go stretch, you earned it!",
                ],
                stop: &["Taking a breather? I'll wait right here!"],
                done: "Quest Complete! +10 EXP! Great job!",
            },
        ),
        (
            Character::Nova,
            CharacterLines {
                idle: &[
                    "Steady. One page at a time.",
                    "Stars don't rush. Neither should you.",
                    "Still here. Still watching you win.",
                ],
                urgent: &[
                    "A deadline approaches. Handle it.",
                    "Quests don't finish themselves, you know.",
                ],
                break_time: &[
                    "Session complete. Rest is part of the work.",
                    "Well held. Now step away from the desk.",
                ],
                stop: &["Paused. The clock can wait; burnout can't."],
                done: "Quest cleared. +10 EXP. Impressive.",
            },
        ),
        (
            Character::Mochi,
            CharacterLines {
                idle: &[
                    "Mochi mochi! Little steps are still steps!",
                    "Warm tea, warm thoughts, good studying!",
                    "I saved a cozy spot for your next win!",
                ],
                urgent: &[
                    "Um! A quest is due soon! Just saying!",
                    "Squish the deadline before it squishes you!",
                ],
                break_time: &[
                    "Ding! Snack break! You were amazing!",
                    "All done! Roll away from the desk like me!",
                ],
                stop: &["Nap mode? Nap mode. I approve!"],
                done: "Quest Complete! +10 EXP! So proud of you!",
            },
        ),
    ],
});

/// The built-in dialog bank.
#[must_use]
pub fn bank() -> &'static DialogBank {
    &BANK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_character_covers_every_situation() {
        for character in Character::ALL {
            for situation in Situation::ALL {
                let candidates = bank().candidates(character, situation);
                assert!(
                    !candidates.is_empty(),
                    "{character} has no lines for {situation:?}"
                );
            }
        }
    }

    #[test]
    fn test_done_is_a_single_fixed_line() {
        for character in Character::ALL {
            assert_eq!(bank().candidates(character, Situation::Done).len(), 1);
        }
    }

    #[test]
    fn test_character_parse() {
        assert_eq!(Character::parse("pip"), Some(Character::Pip));
        assert_eq!(Character::parse("NOVA"), Some(Character::Nova));
        assert_eq!(Character::parse("mochi"), Some(Character::Mochi));
        assert_eq!(Character::parse("dragon"), None);
    }

    #[test]
    fn test_identity_serde_round_trip() {
        for character in Character::ALL {
            let json = serde_json::to_string(&character).unwrap();
            let back: Character = serde_json::from_str(&json).unwrap();
            assert_eq!(back, character);
        }
        assert_eq!(serde_json::to_string(&Character::Nova).unwrap(), "\"nova\"");
    }

    #[test]
    fn test_unknown_identity_in_blob_falls_back_to_default() {
        // A stale profile blob naming a character that no longer exists
        // deserializes to the first (default) identity instead of failing.
        let parsed: Character = serde_json::from_str("\"charA\"").unwrap();
        assert_eq!(parsed, Character::Pip);
    }
}
