//! Command-line interface for tictactoe_console.

use clap::{Parser, Subcommand};

/// Tic-tac-toe against a perfect alpha-beta opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_console")]
#[command(about = "Play or analyze tic-tac-toe against a perfect opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game (you are X, the computer is O)
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Let the computer make the opening move
        #[arg(long)]
        computer_first: bool,
    },

    /// Report whether a board is won, drawn or open
    Eval {
        /// Nine glyphs, row-major: O computer, X human, _ or . empty
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Score every move for the computer and print the best one
    Best {
        /// Nine glyphs, row-major: O computer, X human, _ or . empty
        board: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["tictactoe_console", "play"]).unwrap();
        match cli.command {
            Command::Play {
                config,
                computer_first,
            } => {
                assert_eq!(config, std::path::PathBuf::from("tictactoe.toml"));
                assert!(!computer_first);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_eval_json() {
        let cli = Cli::try_parse_from(["tictactoe_console", "eval", "OX_______", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Eval { json: true, .. }));
    }
}
