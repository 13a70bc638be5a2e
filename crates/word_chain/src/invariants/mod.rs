//! Chain invariants.
//!
//! Invariants are properties every [`RoundState`] must satisfy after any
//! accepted word. The engine checks them in debug builds; tests check them
//! directly.
//!
//! The current word is always the last element of the chain, because
//! [`RoundState::current_word`] derives it from the chain rather than
//! storing it.

use crate::round::RoundState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [(fn(&S) -> bool, &'static str); 3] = [
            (A::holds, A::description()),
            (B::holds, B::description()),
            (C::holds, C::description()),
        ];
        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

mod one_letter_steps;
mod seeded_chain;
mod unique_words;

pub use one_letter_steps::OneLetterStepsInvariant;
pub use seeded_chain::SeededChainInvariant;
pub use unique_words::UniqueWordsInvariant;

/// All chain invariants as a composable set.
pub type ChainInvariants = (
    SeededChainInvariant,
    UniqueWordsInvariant,
    OneLetterStepsInvariant,
);

/// Checks every chain invariant, joining violations into one message.
pub fn check_chain(round: &RoundState) -> Result<(), String> {
    ChainInvariants::check_all(round).map_err(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_round_holds() {
        let round = RoundState::start("came".to_string());
        assert!(ChainInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_unstarted_round_holds() {
        assert!(ChainInvariants::check_all(&RoundState::new()).is_ok());
    }

    #[test]
    fn test_valid_chain_holds() {
        let mut round = RoundState::start("bear".to_string());
        for w in ["fear", "feat", "neat", "meat"] {
            round.push(w.to_string());
        }
        assert!(check_chain(&round).is_ok());
    }

    #[test]
    fn test_corrupted_chain_reports_every_violation() {
        let mut round = RoundState::start("bear".to_string());
        round.push("bear".to_string());
        round.push("bear".to_string());
        round.used_words[0] = "seed".to_string();

        let violations = ChainInvariants::check_all(&round).unwrap_err();
        assert_eq!(violations.len(), 3);

        let message = check_chain(&round).unwrap_err();
        assert!(message.contains("; "));
    }

    #[test]
    fn test_violations_follow_set_order() {
        let mut round = RoundState::start("bear".to_string());
        round.push("beat".to_string());
        round.used_words[0] = "seed".to_string();

        let violations = ChainInvariants::check_all(&round).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            [
                SeededChainInvariant::description(),
                OneLetterStepsInvariant::description(),
            ]
        );
    }
}
