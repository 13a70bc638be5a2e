//! Per-round chain state.

use crate::status::RoundStatus;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// State of one round: the seed word and every word accepted since.
///
/// `used_words` always starts with the seed once the round has started,
/// and the current word is always its last element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub(crate) status: RoundStatus,
    pub(crate) starting_word: String,
    pub(crate) used_words: Vec<String>,
}

impl RoundState {
    /// Creates an unstarted round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a round seeded with `starting_word`.
    #[instrument]
    pub fn start(starting_word: String) -> Self {
        Self {
            status: RoundStatus::InProgress,
            used_words: vec![starting_word.clone()],
            starting_word,
        }
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the seed word.
    pub fn starting_word(&self) -> &str {
        &self.starting_word
    }

    /// Returns the last accepted word, or the seed if none was accepted.
    pub fn current_word(&self) -> &str {
        self.used_words
            .last()
            .map(String::as_str)
            .unwrap_or(&self.starting_word)
    }

    /// Returns the chain in the order words were played.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Returns true if `word` is already part of the chain.
    pub fn has_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Chain length, not counting the seed.
    pub fn score(&self) -> usize {
        self.used_words.len().saturating_sub(1)
    }

    /// Appends an already-validated word (unchecked - use
    /// `ChainEngine::submit_word` for validation).
    pub(crate) fn push(&mut self, word: String) {
        self.used_words.push(word);
    }

    /// Freezes the chain.
    pub(crate) fn end(&mut self) {
        self.status = RoundStatus::Ended;
    }
}
