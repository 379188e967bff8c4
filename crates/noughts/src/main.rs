//! Noughts - play noughts and crosses in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, Session, SessionConfig, report};
use noughts_core::Board;
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play {
            mode,
            computer_side,
            delay_ms,
        } => {
            let config = SessionConfig {
                mode,
                computer: computer_side.into(),
                delay: Duration::from_millis(delay_ms),
            };
            info!(?config, "Starting game");
            let stdin = io::stdin();
            Session::new(config, stdin.lock(), io::stdout()).run()
        }
        Command::Analyze { board, side } => {
            let parsed: Board = board
                .parse()
                .with_context(|| format!("could not read board '{board}'"))?;
            report(&parsed, side.map(Into::into), &mut io::stdout())
        }
    }
}
