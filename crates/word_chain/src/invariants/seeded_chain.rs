//! Seed invariant: a started chain begins with the round's starting word.

use super::Invariant;
use crate::round::RoundState;
use crate::status::RoundStatus;

/// Invariant: `used_words[0]` is the starting word once the round started.
pub struct SeededChainInvariant;

impl Invariant<RoundState> for SeededChainInvariant {
    fn holds(round: &RoundState) -> bool {
        match round.status() {
            RoundStatus::NotStarted => round.used_words().is_empty(),
            RoundStatus::InProgress | RoundStatus::Ended => {
                round.used_words().first().map(String::as_str) == Some(round.starting_word())
            }
        }
    }

    fn description() -> &'static str {
        "Chain starts with the round's starting word"
    }
}
