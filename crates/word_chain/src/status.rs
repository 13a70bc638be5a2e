//! Game and round status enums with explicit transition rules.
//!
//! Status is a closed set of variants. Every engine operation asks
//! [`GameStatus::require`] before touching state, so a status/operation
//! pair that is not listed in [`GameStatus::permits`] is refused instead
//! of falling through.

use crate::error::ChainError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Lifecycle status of a whole game session.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameStatus {
    /// Session created, no round started yet.
    #[default]
    #[strum(to_string = "not started")]
    NotStarted,
    /// A round is running and accepts words.
    #[strum(to_string = "round active")]
    RoundActive,
    /// The current round has ended; more rounds remain.
    #[strum(to_string = "round ended")]
    RoundEnded,
    /// All rounds have been played. Terminal.
    #[strum(to_string = "game over")]
    GameOver,
}

/// Engine operations subject to status checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Operation {
    /// `start_round`.
    #[strum(to_string = "start round")]
    StartRound,
    /// `submit_word`.
    #[strum(to_string = "submit word")]
    SubmitWord,
    /// `on_round_expire`.
    #[strum(to_string = "expire round")]
    ExpireRound,
    /// `advance_round`.
    #[strum(to_string = "advance round")]
    AdvanceRound,
    /// `tick`.
    #[strum(to_string = "tick")]
    Tick,
}

impl GameStatus {
    /// Returns true if the operation is legal from this status.
    pub fn permits(self, operation: Operation) -> bool {
        use GameStatus::*;
        use Operation::*;

        matches!(
            (self, operation),
            (NotStarted, StartRound)
                | (RoundActive, SubmitWord)
                | (RoundActive, ExpireRound)
                | (RoundActive, Tick)
                | (RoundEnded, AdvanceRound)
        )
    }

    /// Checks that the operation is legal from this status.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::IllegalStateTransition`] otherwise.
    #[instrument]
    pub fn require(self, operation: Operation) -> Result<(), ChainError> {
        if self.permits(operation) {
            Ok(())
        } else {
            warn!(status = %self, %operation, "Illegal state transition");
            Err(ChainError::IllegalStateTransition {
                from: self,
                operation,
            })
        }
    }

    /// Returns true once the session is over.
    pub fn is_terminal(self) -> bool {
        self == GameStatus::GameOver
    }
}

/// Lifecycle status of a single round.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum RoundStatus {
    /// Round not yet started.
    #[default]
    #[strum(to_string = "not started")]
    NotStarted,
    /// Round accepting words.
    #[strum(to_string = "in progress")]
    InProgress,
    /// Round finished; chain is frozen.
    #[strum(to_string = "ended")]
    Ended,
}
