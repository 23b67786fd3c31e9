//! Top-level move selection.

use crate::search::{NEG_INFINITY, POS_INFINITY, Placement, search};
use crate::types::{Board, CELL_COUNT, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Search score of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveScore {
    /// Cell index the token would be placed on.
    pub index: usize,
    /// Score of the resulting position for [`Player::Max`].
    pub score: i32,
}

/// Scores every empty cell as a move for `player`, in increasing index order.
///
/// After the candidate is placed the search always runs with the minimizing
/// side to move, so the scores are only meaningful for `player == Player::Max`.
/// The board is unchanged on return.
#[instrument(skip(board), fields(board = %board))]
pub fn move_scores(board: &mut Board, player: Player) -> Vec<MoveScore> {
    let mut scores = Vec::new();
    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }
        let score = {
            let mut placed = Placement::new(board, index, player);
            search(&mut placed, 0, NEG_INFINITY, POS_INFINITY, false)
        };
        debug!(index, score, "Candidate scored");
        scores.push(MoveScore { index, score });
    }
    scores
}

/// Returns the best cell for `player`, or `None` when the board is full.
///
/// Ties go to the lowest index. Only optimal for [`Player::Max`]; see
/// [`move_scores`].
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &mut Board, player: Player) -> Option<usize> {
    let best = move_scores(board, player)
        .into_iter()
        .fold(None::<MoveScore>, |best, candidate| match best {
            Some(current) if candidate.score <= current.score => Some(current),
            _ => Some(candidate),
        });

    match best {
        Some(chosen) => {
            debug!(index = chosen.index, score = chosen.score, "Move selected");
            Some(chosen.index)
        }
        None => {
            debug!("No open cell");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_completes_winning_row() {
        let mut board: Board = "OO_ XX_ ___".parse().unwrap();
        assert_eq!(best_move(&mut board, Player::Max), Some(2));
    }

    #[test]
    fn test_blocks_imminent_loss() {
        let mut board: Board = "XX_ _O_ ___".parse().unwrap();
        assert_eq!(best_move(&mut board, Player::Max), Some(2));
    }

    #[test]
    fn test_takes_immediate_win() {
        // Only cell 2 wins on the spot; Min also threatens cell 8.
        let mut board: Board = "OO_ O_X XX_".parse().unwrap();
        let scores = move_scores(&mut board, Player::Max);
        let immediate: Vec<_> = scores.iter().filter(|s| s.score == 10).collect();
        assert_eq!(immediate.len(), 1);
        assert_eq!(immediate[0].index, 2);
        assert_eq!(best_move(&mut board, Player::Max), Some(2));
    }

    #[test]
    fn test_lowest_index_wins_ties() {
        let mut board = Board::new();
        let scores = move_scores(&mut board, Player::Max);
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|s| s.score == 0));
        assert_eq!(best_move(&mut board, Player::Max), Some(0));
    }

    #[test]
    fn test_full_board_has_no_move() {
        use Cell::{Max, Min};
        let mut board = Board::from_cells([Max, Min, Max, Min, Max, Min, Min, Max, Min]);
        assert_eq!(best_move(&mut board, Player::Max), None);
        assert!(move_scores(&mut board, Player::Max).is_empty());
    }

    #[test]
    fn test_min_selection_keeps_max_arithmetic() {
        let mut board = Board::new();
        let scores = move_scores(&mut board, Player::Min);
        let top = scores.iter().map(|s| s.score).max().unwrap();
        let expected = scores.iter().find(|s| s.score == top).map(|s| s.index);
        assert_eq!(best_move(&mut board, Player::Min), expected);
        assert_eq!(board, Board::new());
    }
}
