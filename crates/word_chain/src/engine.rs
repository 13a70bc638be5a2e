//! The chain engine: round lifecycle, word acceptance, and scoring.
//!
//! ```text
//! NotStarted --start_round--> RoundActive --on_round_expire--> RoundEnded
//!                                  ^                               |
//!                                  +---------advance_round---------+
//!
//! RoundActive --on_round_expire (last round)--> GameOver
//! ```
//!
//! Every operation checks the current [`GameStatus`] first and refuses
//! anything not drawn above with [`ChainError::IllegalStateTransition`].
//! A refused call leaves the engine untouched.

use crate::clock::RoundClock;
use crate::config::GameConfig;
use crate::dictionary::{Dictionary, Lexicon};
use crate::error::ChainError;
use crate::event::{GameEvent, GameSummary, NullSink, ScoreRecord, ScoreSink};
use crate::invariants::check_chain;
use crate::round::RoundState;
use crate::session::Session;
use crate::state::GameState;
use crate::status::{GameStatus, Operation};
use crate::validation::{LegalWord, normalize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A word that extended the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The normalized word.
    pub word: String,
    /// Round score after accepting the word.
    pub score: usize,
}

/// Result of [`ChainEngine::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// The round continues.
    Running {
        /// Units left on the clock.
        remaining: u64,
    },
    /// The clock ran out and the round was closed.
    Expired {
        /// Events emitted by the expiry.
        events: Vec<GameEvent>,
    },
}

/// Single-player word chain engine.
///
/// One engine serves one session. It owns the game state and the round
/// clock; the dictionary is shared read-only.
pub struct ChainEngine<L: Lexicon = Dictionary> {
    lexicon: Arc<L>,
    config: GameConfig,
    session: Session,
    state: GameState,
    clock: RoundClock,
    sink: Box<dyn ScoreSink>,
    sink_failures: usize,
}

impl<L: Lexicon> ChainEngine<L> {
    /// Creates an engine in [`GameStatus::NotStarted`] that discards events.
    #[instrument(skip(lexicon, config, session), fields(session_id = %session.id(), rounds = config.rounds()))]
    pub fn new(lexicon: Arc<L>, config: GameConfig, session: Session) -> Self {
        info!(dictionary_size = lexicon.len(), "Creating chain engine");
        Self {
            lexicon,
            state: GameState::new(config.starting_words().clone()),
            config,
            session,
            clock: RoundClock::new(),
            sink: Box::new(NullSink),
            sink_failures: 0,
        }
    }

    /// Sends score events to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: impl ScoreSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Starts the first round, seeded with `starting_words[round_index]`,
    /// and arms the clock.
    ///
    /// Later rounds are reached only through [`ChainEngine::advance_round`].
    ///
    /// # Errors
    ///
    /// - [`ChainError::IllegalStateTransition`] unless the game is
    ///   `NotStarted`.
    /// - [`ChainError::InvalidRoundIndex`] if the index is out of range.
    /// - [`ChainError::InvalidDuration`] if the configured duration is
    ///   negative.
    #[instrument(skip(self), fields(session_id = %self.session.id()))]
    pub fn start_round(&mut self, round_index: usize) -> Result<(), ChainError> {
        self.state.status.require(Operation::StartRound)?;
        self.begin_round(round_index)
    }

    /// Seeds and activates `round_index`. Callers check status first.
    fn begin_round(&mut self, round_index: usize) -> Result<(), ChainError> {
        let rounds = self.state.starting_words.len();
        let starting_word = self
            .state
            .starting_words
            .get(round_index)
            .cloned()
            .ok_or_else(|| {
                warn!(round_index, rounds, "Round index out of range");
                ChainError::InvalidRoundIndex {
                    index: round_index,
                    rounds,
                }
            })?;

        let mut clock = self.clock;
        clock.reset(*self.config.round_duration())?;

        info!(round_index, starting_word = %starting_word, "Round started");
        self.clock = clock;
        self.state.round = RoundState::start(starting_word);
        self.state.round_index = round_index;
        self.state.status = GameStatus::RoundActive;
        Ok(())
    }

    /// Validates `candidate` and, if legal, appends it to the chain.
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    ///
    /// - [`ChainError::IllegalStateTransition`] unless a round is active.
    /// - One of the word rejections, checked in this order:
    ///   [`ChainError::LengthMismatch`], [`ChainError::TooManyOrNoChanges`],
    ///   [`ChainError::AlreadyUsed`], [`ChainError::NotAWord`].
    #[instrument(skip(self), fields(current = %self.state.round.current_word()))]
    pub fn submit_word(&mut self, candidate: &str) -> Result<Accepted, ChainError> {
        self.state.status.require(Operation::SubmitWord)?;

        let word = normalize(candidate);
        if let Err(rejection) = LegalWord::check(&word, &self.state.round, self.lexicon.as_ref()) {
            debug!(word = %word, %rejection, "Word rejected");
            return Err(rejection);
        }

        self.state.round.push(word.clone());
        debug_assert!(
            check_chain(&self.state.round).is_ok(),
            "Chain invariant violated: {:?}",
            check_chain(&self.state.round)
        );

        let score = self.state.round.score();
        info!(word = %word, score, "Word accepted");
        Ok(Accepted { word, score })
    }

    /// Closes the active round and emits its score.
    ///
    /// If this was the last round the game moves on to
    /// [`GameStatus::GameOver`] and a [`GameEvent::GameCompleted`] follows
    /// the round event. Calling this again once the round has ended is a
    /// no-op that emits nothing.
    ///
    /// Events go to the sink and are also returned.
    ///
    /// # Errors
    ///
    /// [`ChainError::IllegalStateTransition`] before the first round.
    #[instrument(skip(self), fields(session_id = %self.session.id(), round_index = self.state.round_index))]
    pub fn on_round_expire(&mut self) -> Result<Vec<GameEvent>, ChainError> {
        if matches!(
            self.state.status,
            GameStatus::RoundEnded | GameStatus::GameOver
        ) {
            debug!(status = %self.state.status, "Round already closed");
            return Ok(Vec::new());
        }
        self.state.status.require(Operation::ExpireRound)?;

        self.state.round.end();
        self.state.status = GameStatus::RoundEnded;

        let score = self.state.round.score();
        self.state.round_scores.push(score);
        info!(score, "Round ended");

        let mut events = vec![GameEvent::RoundCompleted(ScoreRecord::new(
            *self.session.age(),
            score,
            self.state.round.starting_word(),
            self.session.id(),
            self.state.round_index,
        ))];

        if self.state.is_last_round() {
            self.state.status = GameStatus::GameOver;
            info!(total_score = self.state.total_score(), "Game over");
            events.push(GameEvent::GameCompleted(GameSummary::new(
                *self.session.age(),
                self.session.id(),
                self.state.round_scores.clone(),
            )));
        }

        for event in &events {
            self.deliver(event);
        }
        Ok(events)
    }

    /// Starts the round after the one that just ended.
    ///
    /// # Errors
    ///
    /// [`ChainError::IllegalStateTransition`] unless the game is
    /// `RoundEnded`.
    #[instrument(skip(self))]
    pub fn advance_round(&mut self) -> Result<(), ChainError> {
        self.state.status.require(Operation::AdvanceRound)?;
        self.begin_round(self.state.round_index + 1)
    }

    /// Ticks the clock once and closes the round if it ran out.
    ///
    /// # Errors
    ///
    /// [`ChainError::IllegalStateTransition`] unless a round is active.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> Result<Tick, ChainError> {
        self.state.status.require(Operation::Tick)?;

        let remaining = self.clock.tick();
        if self.clock.is_expired() {
            let events = self.on_round_expire()?;
            Ok(Tick::Expired { events })
        } else {
            Ok(Tick::Running { remaining })
        }
    }

    /// Hands an event to the sink. Failures are logged and counted only.
    fn deliver(&mut self, event: &GameEvent) {
        if let Err(e) = self.sink.record(event) {
            self.sink_failures += 1;
            warn!(error = %e, failures = self.sink_failures, "Failed to record score event");
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Returns the current round index.
    pub fn round_index(&self) -> usize {
        self.state.round_index
    }

    /// Returns true if another round follows the current one.
    pub fn has_more_rounds(&self) -> bool {
        !self.state.status.is_terminal() && self.state.has_more_rounds()
    }

    /// Returns the current round.
    pub fn round(&self) -> &RoundState {
        &self.state.round
    }

    /// Returns the word the next candidate is compared against.
    pub fn current_word(&self) -> &str {
        self.state.round.current_word()
    }

    /// Returns the current chain.
    pub fn used_words(&self) -> &[String] {
        self.state.round.used_words()
    }

    /// Returns the current round score.
    pub fn score(&self) -> usize {
        self.state.round.score()
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session identity.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the round clock.
    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    /// Returns the round clock for hosts that tick it themselves.
    pub fn clock_mut(&mut self) -> &mut RoundClock {
        &mut self.clock
    }

    /// Returns the shared dictionary.
    pub fn lexicon(&self) -> &Arc<L> {
        &self.lexicon
    }

    /// Number of events the sink failed to record.
    pub fn sink_failures(&self) -> usize {
        self.sink_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use crate::event::MemorySink;

    struct FailingSink;

    impl ScoreSink for FailingSink {
        fn record(&mut self, _event: &GameEvent) -> Result<(), SinkError> {
            Err(SinkError::new("disk full"))
        }
    }

    fn engine(words: &[&str], starting: &[&str], duration: i64) -> ChainEngine {
        let dict = Arc::new(Dictionary::from_words(words));
        let config = GameConfig::new(starting, duration).unwrap();
        ChainEngine::new(dict, config, Session::with_id("test", 12))
    }

    #[test]
    fn test_submit_before_start_is_illegal() {
        let mut engine = engine(&["dark", "dare"], &["dark"], 10);
        assert_eq!(
            engine.submit_word("dare"),
            Err(ChainError::IllegalStateTransition {
                from: GameStatus::NotStarted,
                operation: Operation::SubmitWord,
            })
        );
    }

    #[test]
    fn test_start_round_arms_clock() {
        let mut engine = engine(&["dark"], &["dark"], 10);
        engine.start_round(0).unwrap();
        assert_eq!(engine.status(), GameStatus::RoundActive);
        assert_eq!(engine.clock().remaining(), 10);
        assert_eq!(engine.used_words(), ["dark"]);
    }

    #[test]
    fn test_start_round_out_of_range_leaves_state() {
        let mut engine = engine(&["dark"], &["dark", "rose"], 10);
        assert_eq!(
            engine.start_round(2),
            Err(ChainError::InvalidRoundIndex {
                index: 2,
                rounds: 2
            })
        );
        assert_eq!(engine.status(), GameStatus::NotStarted);
        assert!(engine.used_words().is_empty());
    }

    #[test]
    fn test_cannot_restart_active_round() {
        let mut engine = engine(&["dark"], &["dark", "rose"], 10);
        engine.start_round(0).unwrap();
        assert!(matches!(
            engine.start_round(1),
            Err(ChainError::IllegalStateTransition { .. })
        ));
        assert_eq!(engine.current_word(), "dark");
    }

    #[test]
    fn test_start_round_refused_after_round_ends() {
        let mut engine = engine(&["dark"], &["dark", "rose", "tree"], 10);
        engine.start_round(0).unwrap();
        engine.on_round_expire().unwrap();
        let before = engine.state().clone();

        for index in 0..3 {
            assert_eq!(
                engine.start_round(index),
                Err(ChainError::IllegalStateTransition {
                    from: GameStatus::RoundEnded,
                    operation: Operation::StartRound,
                })
            );
        }
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.state().round_scores(), [0]);

        engine.advance_round().unwrap();
        assert_eq!(engine.round_index(), 1);
        assert_eq!(engine.current_word(), "rose");
    }

    #[test]
    fn test_input_is_normalized() {
        let mut engine = engine(&["dark", "dare"], &["dark"], 10);
        engine.start_round(0).unwrap();
        let accepted = engine.submit_word("  DARE ").unwrap();
        assert_eq!(accepted.word, "dare");
        assert_eq!(accepted.score, 1);
    }

    #[test]
    fn test_tick_expires_round() {
        let mut engine = engine(&["dark"], &["dark", "rose"], 2);
        engine.start_round(0).unwrap();

        assert_eq!(engine.tick(), Ok(Tick::Running { remaining: 1 }));
        match engine.tick().unwrap() {
            Tick::Expired { events } => {
                assert_eq!(events.len(), 1);
                assert_eq!(events[0].as_round().map(|r| *r.round_index()), Some(0));
            }
            other => panic!("Expected expiry, got {other:?}"),
        }
        assert_eq!(engine.status(), GameStatus::RoundEnded);
        assert!(matches!(
            engine.tick(),
            Err(ChainError::IllegalStateTransition { .. })
        ));
    }

    #[test]
    fn test_zero_duration_expires_on_first_tick() {
        let mut engine = engine(&["dark"], &["dark"], 0);
        engine.start_round(0).unwrap();
        assert!(matches!(engine.tick(), Ok(Tick::Expired { .. })));
        assert_eq!(engine.status(), GameStatus::GameOver);
    }

    #[test]
    fn test_expire_before_start_is_illegal() {
        let mut engine = engine(&["dark"], &["dark"], 10);
        assert!(matches!(
            engine.on_round_expire(),
            Err(ChainError::IllegalStateTransition { .. })
        ));
    }

    #[test]
    fn test_events_reach_sink() {
        let sink = MemorySink::new();
        let mut engine = engine(&["dark", "dare"], &["dark"], 10).with_sink(sink.clone());
        engine.start_round(0).unwrap();
        engine.submit_word("dare").unwrap();
        engine.on_round_expire().unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 2);
        let record = events[0].as_round().unwrap();
        assert_eq!(*record.score(), 1);
        assert_eq!(*record.age(), 12);
        assert_eq!(record.session_id(), "test");
        assert_eq!(record.starting_word(), "dark");
        assert!(matches!(events[1], GameEvent::GameCompleted(_)));
    }

    #[test]
    fn test_sink_failure_does_not_affect_gameplay() {
        let mut engine = engine(&["dark"], &["dark", "rose"], 10).with_sink(FailingSink);
        engine.start_round(0).unwrap();
        let events = engine.on_round_expire().unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(engine.sink_failures(), 1);
        assert_eq!(engine.status(), GameStatus::RoundEnded);
        engine.advance_round().unwrap();
        assert_eq!(engine.current_word(), "rose");
    }

    #[test]
    fn test_round_scores_accumulate() {
        let mut engine = engine(&["dark", "dare", "rose", "nose"], &["dark", "rose"], 10);
        engine.start_round(0).unwrap();
        engine.submit_word("dare").unwrap();
        engine.on_round_expire().unwrap();
        engine.advance_round().unwrap();
        engine.on_round_expire().unwrap();

        assert_eq!(engine.state().round_scores(), &[1, 0]);
        assert_eq!(engine.state().total_score(), 1);
        assert!(!engine.has_more_rounds());
    }
}
