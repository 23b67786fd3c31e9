//! Exhaustive minimax without pruning.
//!
//! Same scoring and move order as [`super::search`], every child visited.
//! Used to check that pruning never changes a position's value.

use super::{NEG_INFINITY, POS_INFINITY, Placement, SearchStats};
use crate::rules::{evaluate, has_open_cell};
use crate::types::{Board, CELL_COUNT, Player};

/// Unpruned minimax score of `board` with the side given by `maximizing` to move.
pub fn minimax(board: &mut Board, depth: u32, maximizing: bool) -> i32 {
    minimax_with_stats(board, depth, maximizing, &mut SearchStats::default())
}

/// [`minimax`] that also counts visited nodes into `stats`.
pub fn minimax_with_stats(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if let Some(score) = evaluate(board).terminal_score(depth) {
        return score;
    }
    if !has_open_cell(board) {
        return 0;
    }

    let mover = if maximizing { Player::Max } else { Player::Min };
    let mut best = if maximizing { NEG_INFINITY } else { POS_INFINITY };

    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }
        let mut placed = Placement::new(board, index, mover);
        let score = minimax_with_stats(&mut placed, depth + 1, !maximizing, stats);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
