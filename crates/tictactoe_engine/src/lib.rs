//! Tic-tac-toe rules and perfect-play search.
//!
//! The crate answers two questions about a 3x3 board: has the game ended
//! (and how), and which move is optimal for the computer.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`] and [`Player`], with the signed cell
//!   values (`Max = +1`, `Min = -1`, `Empty = 0`) used in scoring
//! - **Rules**: [`evaluate`] classifies a board as won, drawn or open
//! - **Search**: depth-scaled alpha-beta over a shared board
//! - **Select**: [`best_move`] picks the computer's move
//!
//! The engine never checks move legality; callers hand it well-formed boards.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Outcome, Player, best_move, evaluate};
//!
//! let mut board: Board = "OO_ XX_ ___".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::Open);
//! assert_eq!(best_move(&mut board, Player::Max), Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod rules;
mod search;
mod select;
mod types;

// Crate-level exports - Errors
pub use error::{BoardError, BoardErrorKind};

// Crate-level exports - Board state
pub use types::{Board, CELL_COUNT, Cell, Markers, Player};

// Crate-level exports - Terminal evaluation and move enumeration
pub use rules::{
    Outcome, WIN_SCORE, WINNING_TRIADS, check_winner, evaluate, has_open_cell, is_full,
    open_cells,
};

// Crate-level exports - Search
pub use search::{
    NEG_INFINITY, POS_INFINITY, Placement, SearchStats, minimax, minimax_with_stats, search,
    search_with_stats,
};

// Crate-level exports - Move selection
pub use select::{MoveScore, best_move, move_scores};
