//! Error types for the word chain engine.

use crate::status::{GameStatus, Operation};
use tracing::instrument;

/// Reason an engine operation was refused.
///
/// Every variant is recoverable: the engine state is left exactly as it was
/// before the call, and the host may retry with new input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ChainError {
    /// Candidate has a different number of letters than the current word.
    #[display("Word must have {} letters, got {}", expected, actual)]
    LengthMismatch {
        /// Length of the current word.
        expected: usize,
        /// Length of the candidate.
        actual: usize,
    },

    /// Candidate changes zero letters or more than one letter.
    #[display("Exactly one letter must change, found {} changes", changes)]
    TooManyOrNoChanges {
        /// Number of differing positions.
        changes: usize,
    },

    /// Candidate is already part of this round's chain.
    #[display("'{}' has already been used this round", _0)]
    AlreadyUsed(String),

    /// Candidate is not in the dictionary.
    #[display("'{}' is not in the dictionary", _0)]
    NotAWord(String),

    /// Requested round does not exist in this session.
    #[display("Round {} does not exist (session has {} rounds)", index, rounds)]
    InvalidRoundIndex {
        /// Requested round index.
        index: usize,
        /// Number of configured rounds.
        rounds: usize,
    },

    /// Clock duration was negative.
    #[display("Round duration must not be negative, got {}", _0)]
    InvalidDuration(i64),

    /// Operation is not legal from the current status.
    #[display("Cannot {} while {}", operation, from)]
    IllegalStateTransition {
        /// Status at the time of the call.
        from: GameStatus,
        /// Operation that was attempted.
        operation: Operation,
    },
}

impl std::error::Error for ChainError {}

impl ChainError {
    /// Returns true for the four word-rejection kinds.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ChainError::LengthMismatch { .. }
                | ChainError::TooManyOrNoChanges { .. }
                | ChainError::AlreadyUsed(_)
                | ChainError::NotAWord(_)
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Score sink failure.
///
/// Sinks report this to the engine, which logs it and carries on.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Score sink error: {} at {}:{}", message, file, line)]
pub struct SinkError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SinkError {
    /// Creates a new sink error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
