//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. They accept any well-formed board,
//! including ones that alternating play could never reach.

pub mod draw;
pub mod win;

pub use draw::{has_open_cell, is_full, open_cells};
pub use win::{WINNING_TRIADS, check_winner};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Base of the depth-scaled terminal score.
pub const WIN_SCORE: i32 = 10;

/// Terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player owns a full triad.
    Win(Player),
    /// No triad is owned and no cell is empty.
    Draw,
    /// The game is still undecided.
    Open,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Open)
    }

    /// Score of a decided outcome reached `depth` plies into a search.
    ///
    /// Wins count `±(10 - depth)` so faster wins and slower losses rank
    /// higher for the maximizing side. Returns `None` for `Open`.
    pub fn terminal_score(self, depth: u32) -> Option<i32> {
        match self {
            Outcome::Win(player) => Some(player.sign() * (WIN_SCORE - depth as i32)),
            Outcome::Draw => Some(0),
            Outcome::Open => None,
        }
    }
}

/// Evaluates whether the game is won, drawn or still open.
#[instrument(level = "trace", skip_all)]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Open
    };
    trace!(?outcome, "Board evaluated");
    outcome
}
