//! Alpha-beta game-tree search.
//!
//! Scores are from the maximizing player's point of view. The search shares
//! one board across the whole tree: each child is explored through a
//! [`Placement`] guard that undoes the move when the frame exits.

mod minimax;
mod placement;

pub use minimax::{minimax, minimax_with_stats};
pub use placement::Placement;

use crate::rules::{evaluate, has_open_cell};
use crate::types::{Board, CELL_COUNT, Player};

/// Lower window bound standing in for negative infinity.
pub const NEG_INFINITY: i32 = i32::MIN;

/// Upper window bound standing in for positive infinity.
pub const POS_INFINITY: i32 = i32::MAX;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including the root.
    pub nodes: u64,
    /// Sibling loops abandoned because `beta <= alpha`.
    pub cutoffs: u64,
}

/// Scores `board` with the side given by `maximizing` to move.
///
/// `depth` is the number of plies already played on the current path and
/// scales terminal scores. Pass [`NEG_INFINITY`] and [`POS_INFINITY`] as the
/// initial window. The board is identical before and after the call.
pub fn search(board: &mut Board, depth: u32, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    search_with_stats(board, depth, alpha, beta, maximizing, &mut SearchStats::default())
}

/// [`search`] that also records node and cutoff counts into `stats`.
pub fn search_with_stats(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
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

        let score = {
            let mut placed = Placement::new(board, index, mover);
            search_with_stats(&mut placed, depth + 1, alpha, beta, !maximizing, stats)
        };

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}
