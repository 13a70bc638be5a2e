//! Session-wide game state.

use crate::round::RoundState;
use crate::status::GameStatus;
use serde::{Deserialize, Serialize};

/// Complete game state: status, round position, and the active round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) status: GameStatus,
    pub(crate) round_index: usize,
    pub(crate) starting_words: Vec<String>,
    pub(crate) round: RoundState,
    pub(crate) round_scores: Vec<usize>,
}

impl GameState {
    /// Creates an unstarted game over the given seed words.
    pub fn new(starting_words: Vec<String>) -> Self {
        Self {
            status: GameStatus::NotStarted,
            round_index: 0,
            starting_words,
            round: RoundState::new(),
            round_scores: Vec::new(),
        }
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the index of the current (or last played) round.
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Returns the seed words for the session.
    pub fn starting_words(&self) -> &[String] {
        &self.starting_words
    }

    /// Returns the current round.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Returns the final score of every completed round, in play order.
    pub fn round_scores(&self) -> &[usize] {
        &self.round_scores
    }

    /// Sum of all completed round scores.
    pub fn total_score(&self) -> usize {
        self.round_scores.iter().sum()
    }

    /// Returns true if a round exists after the current one.
    pub fn has_more_rounds(&self) -> bool {
        self.round_index + 1 < self.starting_words.len()
    }

    /// Returns true if the current round is the last configured one.
    pub fn is_last_round(&self) -> bool {
        !self.has_more_rounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new(vec!["dark".to_string(), "rose".to_string()]);
        assert_eq!(state.status(), GameStatus::NotStarted);
        assert_eq!(state.round_index(), 0);
        assert!(state.has_more_rounds());
        assert_eq!(state.total_score(), 0);
    }

    #[test]
    fn test_single_round_game_is_last() {
        let state = GameState::new(vec!["dark".to_string()]);
        assert!(state.is_last_round());
    }
}
