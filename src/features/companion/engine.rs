//! Dialog selection.

use crate::core::RandomSource;

use super::bank::bank;
use super::Character;

/// A situation the companion can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situation {
    /// Nothing in particular is happening; gentle encouragement.
    Idle,
    /// A quest deadline is near.
    Urgent,
    /// A focus phase just finished.
    Break,
    /// The user paused the timer.
    Stop,
    /// A quest was completed.
    Done,
}

impl Situation {
    /// All situations.
    pub const ALL: [Self; 5] = [
        Self::Idle,
        Self::Urgent,
        Self::Break,
        Self::Stop,
        Self::Done,
    ];
}

/// Pick a line for the situation in the character's voice.
///
/// A single-candidate entry is returned verbatim; multi-candidate entries
/// are chosen uniformly at random through the injected source.
#[must_use]
pub fn speak(
    character: Character,
    situation: Situation,
    rng: &mut dyn RandomSource,
) -> &'static str {
    let candidates = bank().candidates(character, situation);
    match candidates {
        &[only] => only,
        many => many[rng.pick_index(many.len())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedRandom, ThreadRandom};

    #[test]
    fn test_done_is_deterministic() {
        for character in Character::ALL {
            let first = speak(character, Situation::Done, &mut FixedRandom(0.0));
            let second = speak(character, Situation::Done, &mut FixedRandom(0.99));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_idle_picks_from_candidate_list() {
        let candidates = bank().candidates(Character::Pip, Situation::Idle);
        assert!(candidates.len() > 1);

        let mut rng = ThreadRandom;
        for _ in 0..50 {
            let line = speak(Character::Pip, Situation::Idle, &mut rng);
            assert!(candidates.contains(&line));
        }
    }

    #[test]
    fn test_fixed_source_selects_predictably() {
        let candidates = bank().candidates(Character::Pip, Situation::Idle);

        let first = speak(Character::Pip, Situation::Idle, &mut FixedRandom(0.0));
        assert_eq!(first, candidates[0]);

        let last = speak(Character::Pip, Situation::Idle, &mut FixedRandom(0.999));
        assert_eq!(last, candidates[candidates.len() - 1]);
    }
}
