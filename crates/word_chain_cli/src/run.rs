//! Session setup and the interactive event loop.

use crate::console::Console;
use crate::sink::{FileScoreSink, ScoreFormat};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument};
use word_chain::{ChainEngine, Dictionary, GameConfig, GameStatus, Lexicon, Session};

/// Options for an interactive session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Word list path.
    pub words: PathBuf,
    /// Optional TOML configuration path.
    pub config: Option<PathBuf>,
    /// Player age.
    pub age: u32,
    /// Optional score file.
    pub scores: Option<PathBuf>,
    /// Score file format.
    pub format: ScoreFormat,
    /// Round duration override, in ticks.
    pub duration: Option<i64>,
    /// Time between ticks.
    pub tick: Duration,
}

/// Reads a newline-separated word list into a dictionary.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Dictionary> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read word list '{}'", path.as_ref().display()))?;
    let dictionary = Dictionary::parse(&text);
    if dictionary.is_empty() {
        anyhow::bail!("Word list '{}' is empty", path.as_ref().display());
    }
    info!(words = dictionary.len(), "Word list loaded");
    Ok(dictionary)
}

/// Loads the configuration file if given, then applies overrides.
#[instrument]
pub fn load_config(path: Option<&Path>, duration: Option<i64>) -> Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    Ok(match duration {
        Some(duration) => config.with_round_duration(duration)?,
        None => config,
    })
}

/// Builds the engine for a session from command-line options.
#[instrument(skip(options))]
pub fn build_engine(options: &PlayOptions) -> Result<ChainEngine<Dictionary>> {
    let dictionary = Arc::new(load_dictionary(&options.words)?);
    let config = load_config(options.config.as_deref(), options.duration)?;
    let engine = ChainEngine::new(dictionary, config, Session::new(options.age));

    Ok(match &options.scores {
        Some(path) => engine.with_sink(FileScoreSink::new(path, options.format)),
        None => engine,
    })
}

/// Runs the interactive game on stdin/stdout until the game ends or input
/// closes.
#[instrument(skip(console))]
pub async fn play<L: Lexicon>(mut console: Console<L>, tick: Duration) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    show(console.intro());

    while !console.is_finished() {
        tokio::select! {
            _ = ticker.tick() => show(console.on_tick()),
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    info!("Input closed");
                    break;
                };
                let was_active = console.engine().status() == GameStatus::RoundActive;
                show(console.on_line(&line));
                if !was_active && console.engine().status() == GameStatus::RoundActive {
                    // Give the new round a full first tick.
                    ticker.reset();
                    debug!("Ticker reset for new round");
                }
            }
        }
    }

    info!(
        total_score = console.engine().state().total_score(),
        "Session finished"
    );
    Ok(())
}

fn show(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_dictionary() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Dark\ndare\n\nbare").unwrap();

        let dict = load_dictionary(file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("dark"));
    }

    #[test]
    fn test_empty_word_list_errors() {
        let file = NamedTempFile::new().unwrap();
        assert!(load_dictionary(file.path()).is_err());
    }

    #[test]
    fn test_missing_word_list_errors() {
        let err = load_dictionary("/nonexistent/words.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to read word list"));
    }

    #[test]
    fn test_duration_override() {
        let config = load_config(None, Some(15)).unwrap();
        assert_eq!(*config.round_duration(), 15);
        assert!(load_config(None, Some(-3)).is_err());
    }
}
