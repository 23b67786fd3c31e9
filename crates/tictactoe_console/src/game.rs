//! Interactive game loop: a human (`Min`) against the engine (`Max`).

use crate::config::ConsoleConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, BoardErrorKind, Markers, Outcome, Player, best_move, evaluate};
use tracing::{debug, info, instrument, warn};

/// What happened when a player was asked for a move.
enum Turn {
    /// A cell index to place on.
    Place(usize),
    /// The input line was not a cell number.
    Invalid,
}

/// Turn-taking game over a line reader and a writer.
///
/// All legality checks happen here; the engine only ever sees legal boards.
pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    markers: Markers,
    board: Board,
    to_move: Player,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Creates a game on an empty board.
    pub fn new(input: R, output: W, config: &ConsoleConfig) -> Self {
        let to_move = if *config.computer_first() {
            Player::Max
        } else {
            Player::Min
        };
        Self {
            input,
            output,
            markers: *config.markers(),
            board: Board::new(),
            to_move,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the board is won or full and returns the outcome.
    #[instrument(skip_all, fields(first = ?self.to_move))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Game started");

        while evaluate(&self.board) == Outcome::Open {
            self.print_board()?;

            let index = match self.to_move {
                Player::Min => match self.read_human_move()? {
                    Turn::Place(index) => index,
                    Turn::Invalid => {
                        writeln!(self.output, "Not a cell between 1 and 9, try again.")?;
                        continue;
                    }
                },
                Player::Max => best_move(&mut self.board, Player::Max)
                    .context("Engine found no move on an open board")?,
            };

            match self.board.try_place(index, self.to_move) {
                Ok(()) => {
                    debug!(player = ?self.to_move, cell = index + 1, "Move played");
                    self.to_move = self.to_move.opponent();
                }
                Err(e) if e.kind == BoardErrorKind::Occupied => {
                    warn!(cell = index + 1, "Occupied cell chosen");
                    writeln!(self.output, "That cell is already taken, try again.")?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.print_board()?;
        let outcome = evaluate(&self.board);
        let message = match outcome {
            Outcome::Win(Player::Max) => "Game over! The computer wins.",
            Outcome::Win(Player::Min) => "Game over! You win!",
            _ => "Game over! It's a draw.",
        };
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        info!(?outcome, "Game finished");
        Ok(outcome)
    }

    fn print_board(&mut self) -> Result<()> {
        writeln!(self.output, "{}\n", self.board.render(&self.markers))?;
        Ok(())
    }

    fn read_human_move(&mut self) -> Result<Turn> {
        write!(
            self.output,
            "Player {}, enter a cell (1-9): ",
            self.markers.min
        )?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read move")?;
        if read == 0 {
            anyhow::bail!("Input closed before the game finished");
        }

        let turn = match line.trim().parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => Turn::Place(n - 1),
            _ => Turn::Invalid,
        };
        Ok(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_engine::Cell;

    fn play(script: &str, config: &ConsoleConfig) -> (Result<Outcome>, Board, String) {
        let mut output = Vec::new();
        let mut game = ConsoleGame::new(Cursor::new(script.as_bytes()), &mut output, config);
        let result = game.run();
        let board = *game.board();
        drop(game);
        (result, board, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_rejects_out_of_range_and_garbage() {
        let (result, _, output) = play("0\nten\n", &ConsoleConfig::default());
        assert!(result.is_err());
        assert_eq!(output.matches("Not a cell between 1 and 9").count(), 2);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        // Human takes the center; the computer answers in a corner (cell 1).
        let (result, board, output) = play("5\n5\n", &ConsoleConfig::default());
        assert!(result.is_err());
        assert!(output.contains("already taken"));
        assert_eq!(board.cells().iter().filter(|c| **c != Cell::Empty).count(), 2);
    }

    #[test]
    fn test_computer_opens_in_corner() {
        let config = ConsoleConfig::default().with_computer_first(true);
        let (result, board, _) = play("", &config);
        assert!(result.is_err());
        assert_eq!(board.get(0), Cell::Max);
    }
}
