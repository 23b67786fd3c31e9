//! Board error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised by the checked board entry points, with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board error ({}): {} at {}:{}", kind, message, file, line)]
pub struct BoardError {
    /// What went wrong.
    pub kind: BoardErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

/// Category of a [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Cell index outside 0..=8.
    #[display("out of bounds")]
    OutOfBounds,
    /// Cell already holds a token.
    #[display("occupied")]
    Occupied,
    /// Board text did not contain exactly nine cells.
    #[display("wrong length")]
    WrongLength,
    /// Board text contained a glyph that is not a cell.
    #[display("unknown glyph")]
    UnknownGlyph,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: BoardErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
