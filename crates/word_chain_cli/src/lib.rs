//! Terminal host for the word_chain engine.
//!
//! Supplies what the engine leaves to its host: a dictionary loaded from a
//! word list, a wall-clock ticker, terminal input and output, and a
//! file-backed score sink.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod check;
mod cli;
mod console;
mod run;
mod sink;

pub use check::{ChainReport, replay_chain};
pub use cli::{Cli, Command};
pub use console::Console;
pub use run::{PlayOptions, build_engine, load_config, load_dictionary, play};
pub use sink::{FileScoreSink, ScoreFormat};
