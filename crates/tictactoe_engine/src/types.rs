//! Core domain types for tic-tac-toe.

use crate::error::{BoardError, BoardErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A side in the game.
///
/// `Max` is the computer and scores positively, `Min` is the opponent and
/// scores negatively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Maximizing side (the computer).
    Max,
    /// Minimizing side (the human).
    Min,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Score sign of this side: `+1` for `Max`, `-1` for `Min`.
    pub fn sign(self) -> i32 {
        self.cell().value()
    }

    /// The cell value holding this player's token.
    pub fn cell(self) -> Cell {
        match self {
            Player::Max => Cell::Max,
            Player::Min => Cell::Min,
        }
    }
}

/// Contents of one board cell.
///
/// The discriminants are the values used in score arithmetic:
/// `Empty = 0`, `Max = +1`, `Min = -1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[repr(i8)]
pub enum Cell {
    /// No token.
    #[default]
    Empty = 0,
    /// Token of [`Player::Max`].
    Max = 1,
    /// Token of [`Player::Min`].
    Min = -1,
}

impl Cell {
    /// Signed numeric value of the cell.
    pub fn value(self) -> i32 {
        i32::from(self as i8)
    }

    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Max => Some(Player::Max),
            Cell::Min => Some(Player::Min),
        }
    }
}

/// Glyphs used when rendering a board as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Glyph for an empty cell.
    pub empty: char,
    /// Glyph for a [`Player::Max`] token.
    pub max: char,
    /// Glyph for a [`Player::Min`] token.
    pub min: char,
}

impl Markers {
    /// Default glyphs: `_` empty, `O` computer, `X` human.
    pub const DEFAULT: Markers = Markers {
        empty: '_',
        max: 'O',
        min: 'X',
    };

    /// Glyph for a cell.
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Max => self.max,
            Cell::Min => self.min,
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from explicit cell contents.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Sets the cell at the given index (0-8) without any legality check.
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Checks if the cell at `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Places `player`'s token after checking bounds and occupancy.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        match self.cells.get(index) {
            None => Err(BoardError::new(
                BoardErrorKind::OutOfBounds,
                format!("cell {} is outside 0-{}", index, CELL_COUNT - 1),
            )),
            Some(Cell::Empty) => {
                self.cells[index] = player.cell();
                Ok(())
            }
            Some(_) => Err(BoardError::new(
                BoardErrorKind::Occupied,
                format!("cell {} is already taken", index),
            )),
        }
    }

    /// Formats the board as three rows of glyphs.
    pub fn render(&self, markers: &Markers) -> String {
        self.cells
            .chunks(3)
            .map(|row| row.iter().map(|&c| markers.glyph(c)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Markers::DEFAULT))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine glyphs: `O` for `Max`, `X` for `Min`, and `_`, `.` or a
    /// digit for an empty cell. Whitespace, `|` and `,` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars() {
            let cell = match ch {
                c if c.is_whitespace() || c == '|' || c == ',' => continue,
                'O' | 'o' => Cell::Max,
                'X' | 'x' => Cell::Min,
                '_' | '.' | '1'..='9' => Cell::Empty,
                other => {
                    return Err(BoardError::new(
                        BoardErrorKind::UnknownGlyph,
                        format!("unexpected glyph {:?}", other),
                    ));
                }
            };
            cells.push(cell);
        }

        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|v: Vec<Cell>| {
            BoardError::new(
                BoardErrorKind::WrongLength,
                format!("expected {} cells, found {}", CELL_COUNT, v.len()),
            )
        })?;
        Ok(Self::from_cells(cells))
    }
}
