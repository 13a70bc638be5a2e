//! Word Chain - terminal entry point.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use word_chain_cli::{
    Cli, Command, Console, PlayOptions, build_engine, load_dictionary, play, replay_chain,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            words,
            config,
            age,
            scores,
            format,
            duration,
            tick_ms,
        } => {
            run_play(PlayOptions {
                words,
                config,
                age,
                scores,
                format,
                duration,
                tick: Duration::from_millis(tick_ms),
            })
            .await
        }
        Command::Check { words, chain } => run_check(words, chain),
    }
}

/// Play an interactive session.
#[instrument(skip(options))]
async fn run_play(options: PlayOptions) -> Result<()> {
    let engine = build_engine(&options)?;
    info!(
        session_id = %engine.session().id(),
        rounds = engine.config().rounds(),
        "Starting session"
    );
    play(Console::new(engine), options.tick).await
}

/// Check a chain and print the verdicts.
#[instrument]
fn run_check(words: std::path::PathBuf, chain: Vec<String>) -> Result<()> {
    let dictionary = Arc::new(load_dictionary(&words)?);
    let report = replay_chain(dictionary, &chain)?;
    for line in report.lines() {
        println!("{line}");
    }
    Ok(())
}
