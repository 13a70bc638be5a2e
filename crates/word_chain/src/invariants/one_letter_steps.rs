//! Step invariant: consecutive words differ by exactly one letter.

use super::Invariant;
use crate::round::RoundState;
use crate::validation::is_one_letter_apart;

/// Invariant: every word after the seed is one letter away from its
/// predecessor, at equal length.
pub struct OneLetterStepsInvariant;

impl Invariant<RoundState> for OneLetterStepsInvariant {
    fn holds(round: &RoundState) -> bool {
        round
            .used_words()
            .windows(2)
            .all(|pair| is_one_letter_apart(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each word differs from the previous one by exactly one letter"
    }
}
