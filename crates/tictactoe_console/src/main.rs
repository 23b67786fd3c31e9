//! tictactoe_console - play or analyze tic-tac-toe from the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_console::{Cli, Command, ConsoleConfig, ConsoleGame, best, eval};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            computer_first,
        } => run_play(config, computer_first),
        Command::Eval { board, json } => {
            println!("{}", eval(&board, json)?);
            Ok(())
        }
        Command::Best { board } => {
            println!("{}", best(&board)?);
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(config_path: PathBuf, computer_first: bool) -> Result<()> {
    let mut config = ConsoleConfig::load_or_default(&config_path)?;
    if computer_first {
        config = config.with_computer_first(true);
    }
    info!(?config, "Starting interactive game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = ConsoleGame::new(stdin.lock(), stdout.lock(), &config);
    let outcome = game.run()?;

    info!(?outcome, "Session ended");
    Ok(())
}
