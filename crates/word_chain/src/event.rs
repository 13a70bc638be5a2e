//! Score events and the sink they are delivered to.
//!
//! Events are domain records, not side effects: the engine builds them,
//! hands them to a [`ScoreSink`], and also returns them to the caller.
//! Whatever the sink does with them cannot affect gameplay.

use crate::error::SinkError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument};

/// Score of one finished round.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Player age from the session.
    age: u32,
    /// Chain length, not counting the seed.
    score: usize,
    /// Seed word of the round.
    starting_word: String,
    /// Session id.
    session_id: String,
    /// Round position within the session.
    round_index: usize,
}

impl ScoreRecord {
    /// Creates a score record.
    pub fn new(
        age: u32,
        score: usize,
        starting_word: impl Into<String>,
        session_id: impl Into<String>,
        round_index: usize,
    ) -> Self {
        Self {
            age,
            score,
            starting_word: starting_word.into(),
            session_id: session_id.into(),
            round_index,
        }
    }
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSummary {
    /// Player age from the session.
    age: u32,
    /// Session id.
    session_id: String,
    /// Sum of all round scores.
    total_score: usize,
    /// Score of each round, in play order.
    round_scores: Vec<usize>,
}

impl GameSummary {
    /// Creates a summary from per-round scores.
    pub fn new(age: u32, session_id: impl Into<String>, round_scores: Vec<usize>) -> Self {
        Self {
            age,
            session_id: session_id.into(),
            total_score: round_scores.iter().sum(),
            round_scores,
        }
    }
}

/// Event emitted when a round or the whole game finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A round's clock expired.
    RoundCompleted(ScoreRecord),
    /// The last round expired.
    GameCompleted(GameSummary),
}

impl GameEvent {
    /// Returns the score record for round events.
    pub fn as_round(&self) -> Option<&ScoreRecord> {
        match self {
            GameEvent::RoundCompleted(record) => Some(record),
            GameEvent::GameCompleted(_) => None,
        }
    }
}

/// Receiver for score events.
///
/// Delivery is fire-and-forget: the engine does not retry and does not let
/// an error change game state.
pub trait ScoreSink {
    /// Records one event.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the event could not be stored.
    fn record(&mut self, event: &GameEvent) -> Result<(), SinkError>;
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn record(&mut self, _event: &GameEvent) -> Result<(), SinkError> {
        Ok(())
    }
}

/// In-memory sink. Clones share the same buffer, so a host can keep one
/// handle while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event recorded so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreSink for MemorySink {
    #[instrument(skip(self, event))]
    fn record(&mut self, event: &GameEvent) -> Result<(), SinkError> {
        debug!(?event, "Buffering event");
        self.events
            .lock()
            .map_err(|_| SinkError::new("Event buffer lock poisoned"))?
            .push(event.clone());
        Ok(())
    }
}

impl<S: ScoreSink + ?Sized> ScoreSink for Box<S> {
    fn record(&mut self, event: &GameEvent) -> Result<(), SinkError> {
        (**self).record(event)
    }
}
