//! Offline chain checking.

use std::sync::Arc;
use tracing::{info, instrument};
use word_chain::{Accepted, ChainEngine, ChainError, GameConfig, Lexicon, Session};

/// Verdict for each word of a checked chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainReport {
    /// Seed word.
    pub seed: String,
    /// Each played word with its result, in order.
    pub verdicts: Vec<(String, Result<Accepted, ChainError>)>,
    /// Final chain score.
    pub score: usize,
}

impl ChainReport {
    /// Renders the report as display lines.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![format!("seed: {}", self.seed)];
        for (word, verdict) in &self.verdicts {
            out.push(match verdict {
                Ok(accepted) => format!("ok    {word} (score {})", accepted.score),
                Err(rejection) => format!("no    {word}: {rejection}"),
            });
        }
        out.push(format!("score: {}", self.score));
        out
    }
}

/// Plays `chain[1..]` against the seed `chain[0]`.
///
/// Rejected words are reported and skipped, so later words are compared
/// against the last accepted one.
///
/// # Errors
///
/// Returns an error if the chain is empty or the seed is blank.
#[instrument(skip(lexicon))]
pub fn replay_chain<L: Lexicon>(
    lexicon: Arc<L>,
    chain: &[String],
) -> anyhow::Result<ChainReport> {
    let (seed, rest) = chain
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("A chain needs at least a seed word"))?;

    let config = GameConfig::new([seed], 0)?;
    let mut engine = ChainEngine::new(lexicon, config, Session::with_id("check", 0));
    engine.start_round(0)?;

    let verdicts = rest
        .iter()
        .map(|word| (word.clone(), engine.submit_word(word)))
        .collect();

    let report = ChainReport {
        seed: engine.round().starting_word().to_string(),
        verdicts,
        score: engine.score(),
    };
    info!(score = report.score, "Chain checked");
    Ok(report)
}
