//! Scoped hypothetical moves.

use crate::types::{Board, Cell, Player};
use std::ops::{Deref, DerefMut};

/// A token placed on a borrowed board for the lifetime of the guard.
///
/// Dropping the guard resets the cell to [`Cell::Empty`], so every exit
/// from a search frame (normal return, cutoff `break`, unwinding) leaves
/// the board as it found it.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Placement<'a> {
    /// Places `player`'s token at `index`. The cell must currently be empty.
    pub fn new(board: &'a mut Board, index: usize, player: Player) -> Self {
        debug_assert!(board.is_empty(index), "placement on occupied cell {index}");
        board.set(index, player.cell());
        Self { board, index }
    }

    /// Index of the placed token.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.index, Cell::Empty);
    }
}
