//! One-shot board analysis commands.

use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe_engine::{Board, MoveScore, Outcome, Player, evaluate, move_scores, open_cells};
use tracing::instrument;

/// Summary printed by the `eval` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// Terminal classification of the board.
    pub outcome: Outcome,
    /// Empty cells, 1-based.
    pub open_cells: Vec<usize>,
}

impl EvalReport {
    /// Evaluates `board`.
    pub fn new(board: &Board) -> Self {
        Self {
            outcome: evaluate(board),
            open_cells: open_cells(board).map(|i| i + 1).collect(),
        }
    }

    /// Human-readable form.
    pub fn to_text(&self) -> String {
        match self.outcome {
            Outcome::Win(Player::Max) => "Computer (Max) has won.".to_string(),
            Outcome::Win(Player::Min) => "Human (Min) has won.".to_string(),
            Outcome::Draw => "Draw: the board is full.".to_string(),
            Outcome::Open => format!("Open: cells {:?} are free.", self.open_cells),
        }
    }
}

/// Parses `text` and renders the `eval` command output.
#[instrument]
pub fn eval(text: &str, json: bool) -> Result<String> {
    let board: Board = text.parse().context("Invalid board")?;
    let report = EvalReport::new(&board);
    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(format!("{}\n\n{}", board, report.to_text()))
    }
}

/// Parses `text` and renders every candidate score for the computer.
#[instrument]
pub fn best(text: &str) -> Result<String> {
    let mut board: Board = text.parse().context("Invalid board")?;
    if evaluate(&board).is_decided() {
        return Ok(format!("{}\n\nThe game is already over.", board));
    }

    let scores = move_scores(&mut board, Player::Max);
    let mut out = format!("{}\n\n", board);
    for MoveScore { index, score } in &scores {
        out.push_str(&format!("cell {}: {:+}\n", index + 1, score));
    }

    let chosen = scores
        .iter()
        .fold(None::<&MoveScore>, |best, candidate| match best {
            Some(current) if candidate.score <= current.score => Some(current),
            _ => Some(candidate),
        })
        .context("No open cell")?;
    out.push_str(&format!("best move: cell {}", chosen.index + 1));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_text() {
        let out = eval("XXX OO_ ___", false).unwrap();
        assert!(out.starts_with("XXX\nOO_\n___"));
        assert!(out.ends_with("Human (Min) has won."));
    }

    #[test]
    fn test_eval_json() {
        let out = eval("OX_ ___ ___", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["outcome"], "Open");
        assert_eq!(value["open_cells"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_eval_rejects_bad_board() {
        assert!(eval("OX", false).is_err());
    }

    #[test]
    fn test_best_lists_scores() {
        let out = best("OO_ XX_ ___").unwrap();
        assert!(out.contains("cell 3: +10"));
        assert!(out.ends_with("best move: cell 3"));
    }

    #[test]
    fn test_best_on_finished_game() {
        let out = best("OXO XOX XOX").unwrap();
        assert!(out.ends_with("already over."));
    }
}
