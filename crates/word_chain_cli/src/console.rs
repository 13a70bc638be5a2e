//! Turns terminal input and clock ticks into engine calls.
//!
//! [`Console`] is synchronous: it takes one line or one tick and returns
//! the lines to show. The async loop in [`crate::run`] only decides which
//! of the two happened next.

use tracing::{debug, instrument};
use word_chain::{ChainEngine, GameEvent, GameStatus, Lexicon, Tick};

/// Remaining-time announcements are made at multiples of this many ticks.
const ANNOUNCE_EVERY: u64 = 10;

/// Ticks below which every tick is announced.
const COUNTDOWN_FROM: u64 = 5;

/// Terminal front end for one session.
pub struct Console<L: Lexicon> {
    engine: ChainEngine<L>,
    reported_failures: usize,
}

impl<L: Lexicon> Console<L> {
    /// Wraps an engine that has not started yet.
    pub fn new(engine: ChainEngine<L>) -> Self {
        Self {
            engine,
            reported_failures: 0,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &ChainEngine<L> {
        &self.engine
    }

    /// Returns true once the game is over.
    pub fn is_finished(&self) -> bool {
        self.engine.status().is_terminal()
    }

    /// Lines shown before the first round.
    pub fn intro(&self) -> Vec<String> {
        vec![
            "Welcome to Word Chain!".to_string(),
            "Change exactly one letter to make a new word. No repeats.".to_string(),
            "Example: bear-fear-feat-neat-meat-mean-lean-bean-beat".to_string(),
            format!("Press Enter to start round 1/{}.", self.engine.config().rounds()),
        ]
    }

    /// Handles one line of input.
    #[instrument(skip(self), fields(status = %self.engine.status()))]
    pub fn on_line(&mut self, line: &str) -> Vec<String> {
        match self.engine.status() {
            GameStatus::NotStarted => self.begin(|engine| engine.start_round(0)),
            GameStatus::RoundEnded => self.begin(|engine| engine.advance_round()),
            GameStatus::RoundActive => {
                if line.trim().is_empty() {
                    return Vec::new();
                }
                match self.engine.submit_word(line) {
                    Ok(accepted) => vec![format!(
                        "{}  (score {})",
                        self.engine.used_words().join("-"),
                        accepted.score
                    )],
                    Err(rejection) => vec![format!("Not accepted: {rejection}")],
                }
            }
            GameStatus::GameOver => Vec::new(),
        }
    }

    /// Handles one clock tick.
    #[instrument(skip(self))]
    pub fn on_tick(&mut self) -> Vec<String> {
        if self.engine.status() != GameStatus::RoundActive {
            return Vec::new();
        }

        let mut out = match self.engine.tick() {
            Ok(Tick::Running { remaining }) => {
                if remaining % ANNOUNCE_EVERY == 0 || remaining <= COUNTDOWN_FROM {
                    vec![format!("{remaining} seconds left")]
                } else {
                    Vec::new()
                }
            }
            Ok(Tick::Expired { events }) => self.describe(&events),
            Err(e) => {
                debug!(error = %e, "Tick refused");
                Vec::new()
            }
        };
        out.extend(self.failure_notice());
        out
    }

    fn begin(
        &mut self,
        start: impl FnOnce(&mut ChainEngine<L>) -> Result<(), word_chain::ChainError>,
    ) -> Vec<String> {
        match start(&mut self.engine) {
            Ok(()) => vec![format!(
                "Round {}/{}: start from '{}' ({} seconds)",
                self.engine.round_index() + 1,
                self.engine.config().rounds(),
                self.engine.current_word(),
                self.engine.clock().remaining()
            )],
            Err(e) => vec![format!("Cannot start round: {e}")],
        }
    }

    fn describe(&self, events: &[GameEvent]) -> Vec<String> {
        let mut out = Vec::new();
        for event in events {
            match event {
                GameEvent::RoundCompleted(record) => out.push(format!(
                    "Time's up! You scored {} points in that round.",
                    record.score()
                )),
                GameEvent::GameCompleted(summary) => out.push(format!(
                    "Game over. Total score: {}. Thanks for playing!",
                    summary.total_score()
                )),
            }
        }
        if self.engine.status() == GameStatus::RoundEnded {
            out.push(format!(
                "Press Enter to start round {}/{}.",
                self.engine.round_index() + 2,
                self.engine.config().rounds()
            ));
        }
        out
    }

    /// One line per batch of new sink failures.
    fn failure_notice(&mut self) -> Option<String> {
        let failures = self.engine.sink_failures();
        if failures > self.reported_failures {
            self.reported_failures = failures;
            Some("(your score could not be saved)".to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use word_chain::{Dictionary, GameConfig, Session, SinkError, ScoreSink};

    fn console(duration: i64) -> Console<Dictionary> {
        let engine = ChainEngine::new(
            Arc::new(Dictionary::from_words(["dark", "dare", "bare", "rose"])),
            GameConfig::new(["dark", "rose"], duration).unwrap(),
            Session::with_id("console", 9),
        );
        Console::new(engine)
    }

    #[test]
    fn test_enter_starts_round() {
        let mut console = console(60);
        let out = console.on_line("");
        assert_eq!(out, ["Round 1/2: start from 'dark' (60 seconds)"]);
        assert_eq!(console.engine().status(), GameStatus::RoundActive);
    }

    #[test]
    fn test_words_are_submitted() {
        let mut console = console(60);
        console.on_line("");
        assert_eq!(console.on_line("dare"), ["dark-dare  (score 1)"]);
        let out = console.on_line("dare");
        assert!(out[0].starts_with("Not accepted:"));
        assert!(console.on_line("   ").is_empty());
    }

    #[test]
    fn test_ticks_announce_and_expire() {
        let mut console = console(3);
        console.on_line("");

        assert_eq!(console.on_tick(), ["2 seconds left"]);
        assert_eq!(console.on_tick(), ["1 seconds left"]);
        let out = console.on_tick();
        assert_eq!(out[0], "Time's up! You scored 0 points in that round.");
        assert_eq!(out[1], "Press Enter to start round 2/2.");

        // Ticks between rounds are ignored.
        assert!(console.on_tick().is_empty());
    }

    #[test]
    fn test_full_game() {
        let mut console = console(1);
        console.on_line("");
        console.on_tick();
        let out = console.on_line("");
        assert_eq!(out, ["Round 2/2: start from 'rose' (1 seconds)"]);

        let out = console.on_tick();
        assert!(out.iter().any(|l| l.starts_with("Game over")));
        assert!(console.is_finished());
        assert!(console.on_line("anything").is_empty());
    }

    struct FailingSink;

    impl ScoreSink for FailingSink {
        fn record(&mut self, _event: &GameEvent) -> Result<(), SinkError> {
            Err(SinkError::new("offline"))
        }
    }

    #[test]
    fn test_sink_failure_notice() {
        let engine = ChainEngine::new(
            Arc::new(Dictionary::from_words(["dark"])),
            GameConfig::new(["dark", "rose"], 1).unwrap(),
            Session::with_id("console", 9),
        )
        .with_sink(FailingSink);
        let mut console = Console::new(engine);
        console.on_line("");

        let out = console.on_tick();
        assert_eq!(out.last().map(String::as_str), Some("(your score could not be saved)"));
    }
}
