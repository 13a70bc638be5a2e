//! Uniqueness invariant: no word appears twice in a chain.

use super::Invariant;
use crate::round::RoundState;
use std::collections::HashSet;

/// Invariant: `used_words` contains no duplicates.
pub struct UniqueWordsInvariant;

impl Invariant<RoundState> for UniqueWordsInvariant {
    fn holds(round: &RoundState) -> bool {
        let mut seen = HashSet::new();
        round.used_words().iter().all(|w| seen.insert(w.as_str()))
    }

    fn description() -> &'static str {
        "No word appears twice in the chain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_words_hold() {
        let mut round = RoundState::start("dark".to_string());
        round.push("dare".to_string());
        round.push("bare".to_string());
        assert!(UniqueWordsInvariant::holds(&round));
    }

    #[test]
    fn test_repeat_violates() {
        let mut round = RoundState::start("dark".to_string());
        round.push("dare".to_string());
        round.push("dark".to_string());
        assert!(!UniqueWordsInvariant::holds(&round));
    }
}
