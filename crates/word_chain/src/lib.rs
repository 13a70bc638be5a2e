//! Word Chain - timed word-ladder game logic
//!
//! A player turns a starting word into a chain of dictionary words, each one
//! letter away from the previous, without repeats, before the round clock
//! runs out.
//!
//! # Architecture
//!
//! - **ChainEngine**: owns game and round state, validates words, advances
//!   rounds, and emits score events
//! - **RoundClock**: host-driven countdown, no wall-clock dependency
//! - **Dictionary**: immutable word set shared by reference
//! - **ScoreSink**: fire-and-forget receiver for score events
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use word_chain::{ChainEngine, Dictionary, GameConfig, Session};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dictionary = Arc::new(Dictionary::from_words(["dark", "dare", "bare"]));
//! let config = GameConfig::new(["dark"], 60)?;
//! let mut engine = ChainEngine::new(dictionary, config, Session::new(30));
//!
//! engine.start_round(0)?;
//! assert_eq!(engine.submit_word("dare")?.score, 1);
//! assert_eq!(engine.submit_word("bare")?.score, 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod config;
mod dictionary;
mod engine;
mod error;
mod event;
mod invariants;
mod round;
mod session;
mod state;
mod status;
mod validation;

// Crate-level exports - Engine
pub use engine::{Accepted, ChainEngine, Tick};

// Crate-level exports - State
pub use clock::RoundClock;
pub use round::RoundState;
pub use state::GameState;
pub use status::{GameStatus, Operation, RoundStatus};

// Crate-level exports - Dictionary and validation
pub use dictionary::{Dictionary, Lexicon};
pub use validation::{
    InDictionary, LegalWord, LengthMatches, NotYetUsed, SingleLetterChange, hamming_distance,
    is_one_letter_apart, normalize,
};

// Crate-level exports - Invariants
pub use invariants::{
    ChainInvariants, Invariant, InvariantSet, InvariantViolation, OneLetterStepsInvariant,
    SeededChainInvariant, UniqueWordsInvariant, check_chain,
};

// Crate-level exports - Events
pub use event::{GameEvent, GameSummary, MemorySink, NullSink, ScoreRecord, ScoreSink};

// Crate-level exports - Session and configuration
pub use config::{DEFAULT_ROUND_DURATION, DEFAULT_STARTING_WORDS, GameConfig};
pub use error::{ChainError, ConfigError, SinkError};
pub use session::{SESSION_ID_LEN, Session, SessionId};
