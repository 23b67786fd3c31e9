//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};

/// The eight lines that win when uniformly owned: rows, columns, diagonals.
pub const WINNING_TRIADS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Triads are scanned in [`WINNING_TRIADS`] order and the first one fully
/// owned by a player decides, so a board with two owners still yields a
/// single answer.
pub fn check_winner(board: &Board) -> Option<Player> {
    WINNING_TRIADS.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            cell.owner()
        } else {
            None
        }
    })
}
