//! Open-cell enumeration and full-board detection.

use crate::types::{Board, Cell};

/// Returns true iff at least one cell is empty.
pub fn has_open_cell(board: &Board) -> bool {
    board.cells().contains(&Cell::Empty)
}

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    !has_open_cell(board)
}

/// Indices of the empty cells, in increasing order.
pub fn open_cells(board: &Board) -> impl Iterator<Item = usize> + '_ {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_open_cells() {
        let board = Board::new();
        assert!(has_open_cell(&board));
        assert!(!is_full(&board));
        assert_eq!(open_cells(&board).count(), 9);
    }

    #[test]
    fn test_partial_board() {
        let mut board = Board::new();
        board.set(0, Cell::Min);
        board.set(4, Cell::Max);
        assert!(has_open_cell(&board));
        assert_eq!(open_cells(&board).collect::<Vec<_>>(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_cells([Cell::Max; 9]);
        assert!(!has_open_cell(&board));
        assert!(is_full(&board));
        assert_eq!(open_cells(&board).next(), None);
    }
}
