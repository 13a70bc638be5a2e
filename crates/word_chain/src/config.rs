//! Session configuration.

use crate::error::ConfigError;
use crate::validation::normalize;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Seed words used when no configuration is supplied.
pub const DEFAULT_STARTING_WORDS: [&str; 5] = ["came", "flat", "lots", "bead", "tree"];

/// Round length, in clock units, used when no configuration is supplied.
pub const DEFAULT_ROUND_DURATION: i64 = 60;

/// Configuration for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed word for each round, in play order.
    #[serde(default = "default_starting_words")]
    starting_words: Vec<String>,

    /// Clock units per round.
    #[serde(default = "default_round_duration")]
    round_duration: i64,
}

#[instrument]
fn default_starting_words() -> Vec<String> {
    DEFAULT_STARTING_WORDS.iter().map(|w| w.to_string()).collect()
}

#[instrument]
fn default_round_duration() -> i64 {
    DEFAULT_ROUND_DURATION
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// Starting words are trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if there are no starting words, a starting
    /// word is blank, or the duration is negative.
    #[instrument(skip(starting_words))]
    pub fn new<I, S>(starting_words: I, round_duration: i64) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            starting_words: starting_words
                .into_iter()
                .map(|w| w.as_ref().to_string())
                .collect(),
            round_duration,
        }
        .validated()
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            rounds = config.starting_words.len(),
            round_duration = config.round_duration,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validated()
    }

    /// Replaces the round duration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the duration is negative.
    pub fn with_round_duration(mut self, round_duration: i64) -> Result<Self, ConfigError> {
        self.round_duration = round_duration;
        self.validated()
    }

    /// Number of rounds in a session.
    pub fn rounds(&self) -> usize {
        self.starting_words.len()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        if self.starting_words.is_empty() {
            return Err(ConfigError::new("At least one starting word is required"));
        }
        for word in &mut self.starting_words {
            *word = normalize(word);
            if word.is_empty() {
                return Err(ConfigError::new("Starting words must not be blank"));
            }
        }
        if self.round_duration < 0 {
            return Err(ConfigError::new(format!(
                "Round duration must not be negative, got {}",
                self.round_duration
            )));
        }
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_words: default_starting_words(),
            round_duration: default_round_duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_words(), &DEFAULT_STARTING_WORDS);
        assert_eq!(*config.round_duration(), 60);
        assert_eq!(config.rounds(), 5);
    }

    #[test]
    fn test_new_normalizes_words() {
        let config = GameConfig::new([" Dark", "ROSE "], 30).unwrap();
        assert_eq!(config.starting_words(), &["dark", "rose"]);
    }

    #[test]
    fn test_rejects_empty_word_list() {
        let err = GameConfig::new(Vec::<String>::new(), 30).unwrap_err();
        assert!(err.message.contains("At least one"));
    }

    #[test]
    fn test_rejects_blank_word() {
        assert!(GameConfig::new(["dark", "  "], 30).is_err());
    }

    #[test]
    fn test_rejects_negative_duration() {
        assert!(GameConfig::new(["dark"], -5).is_err());
        assert!(GameConfig::default().with_round_duration(-1).is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml("round_duration = 45").unwrap();
        assert_eq!(*config.round_duration(), 45);
        assert_eq!(config.rounds(), DEFAULT_STARTING_WORDS.len());
    }

    #[test]
    fn test_invalid_toml() {
        let err = GameConfig::from_toml("starting_words = 3").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
