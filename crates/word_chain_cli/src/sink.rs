//! File-backed score sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use word_chain::{GameEvent, ScoreSink, SinkError};

/// Line format for the score file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ScoreFormat {
    /// `starting_word age score`, one line per round.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Appends score events to a file, creating it on first write.
#[derive(Debug, Clone)]
pub struct FileScoreSink {
    path: PathBuf,
    format: ScoreFormat,
}

impl FileScoreSink {
    /// Creates a sink writing to `path` in `format`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>, format: ScoreFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    /// Returns the score file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders an event as a line, or `None` if the format skips it.
    fn render(&self, event: &GameEvent) -> Result<Option<String>, SinkError> {
        match self.format {
            ScoreFormat::Text => Ok(event.as_round().map(|record| {
                format!(
                    "{} {} {}\n",
                    record.starting_word(),
                    record.age(),
                    record.score()
                )
            })),
            ScoreFormat::Json => serde_json::to_string(event)
                .map(|json| Some(format!("{json}\n")))
                .map_err(|e| SinkError::new(format!("Failed to serialize event: {}", e))),
        }
    }
}

impl ScoreSink for FileScoreSink {
    #[instrument(skip(self, event), fields(path = %self.path.display(), format = %self.format))]
    fn record(&mut self, event: &GameEvent) -> Result<(), SinkError> {
        let Some(line) = self.render(event)? else {
            debug!("Event not recorded in this format");
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                SinkError::new(format!(
                    "Failed to open '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;
        file.write_all(line.as_bytes())
            .map_err(|e| SinkError::new(format!("Failed to append score: {}", e)))?;

        debug!("Score appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use word_chain::{GameSummary, ScoreRecord};

    fn round_event(word: &str, score: usize) -> GameEvent {
        GameEvent::RoundCompleted(ScoreRecord::new(9, score, word, "abc", 0))
    }

    #[test]
    fn test_text_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.txt");
        let mut sink = FileScoreSink::new(&path, ScoreFormat::Text);

        sink.record(&round_event("came", 3)).unwrap();
        sink.record(&round_event("flat", 0)).unwrap();
        sink.record(&GameEvent::GameCompleted(GameSummary::new(9, "abc", vec![3, 0])))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "came 9 3\nflat 9 0\n");
    }

    #[test]
    fn test_json_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.jsonl");
        let mut sink = FileScoreSink::new(&path, ScoreFormat::Json);

        sink.record(&round_event("lots", 2)).unwrap();
        sink.record(&GameEvent::GameCompleted(GameSummary::new(9, "abc", vec![2])))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "round_completed");
        assert_eq!(lines[0]["score"], 2);
        assert_eq!(lines[1]["event"], "game_completed");
        assert_eq!(lines[1]["total_score"], 2);
    }

    #[test]
    fn test_unwritable_path_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("scores.txt");
        let mut sink = FileScoreSink::new(&path, ScoreFormat::Text);

        let err = sink.record(&round_event("tree", 1)).unwrap_err();
        assert!(err.message.starts_with("Failed to open"));
    }
}
