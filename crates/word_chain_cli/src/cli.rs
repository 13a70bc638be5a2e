//! Command-line interface for word_chain.

use crate::sink::ScoreFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Word Chain - change one letter at a time before the clock runs out
#[derive(Parser, Debug)]
#[command(name = "word_chain")]
#[command(about = "Timed word-ladder game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a timed game in the terminal
    Play {
        /// Word list, one word per line
        #[arg(short, long)]
        words: PathBuf,

        /// Session configuration (TOML). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Player age, recorded with each score
        #[arg(long)]
        age: u32,

        /// File that round scores are appended to
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Score file format
        #[arg(long, value_enum, default_value_t = ScoreFormat::Text)]
        format: ScoreFormat,

        /// Override the round duration (in ticks)
        #[arg(long)]
        duration: Option<i64>,

        /// Milliseconds between clock ticks
        #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: u64,
    },

    /// Check a chain offline. The first word is the seed.
    Check {
        /// Word list, one word per line
        #[arg(short, long)]
        words: PathBuf,

        /// Seed word followed by the words to play
        #[arg(required = true, num_args = 2..)]
        chain: Vec<String>,
    },
}
