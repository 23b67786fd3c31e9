//! Terminal front end for `tictactoe_engine`.
//!
//! Reads moves from the console, keeps turns and legality, and asks the
//! engine for the computer's reply.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod game;

pub use cli::{Cli, Command};
pub use commands::{EvalReport, best, eval};
pub use config::{ConfigError, ConsoleConfig};
pub use game::ConsoleGame;
