//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: who owns a line, whether the board is
//! full, and which of the three outcomes currently holds.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winner};

use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Outcome of a board. Exactly one variant holds for every board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner and at least one empty cell.
    #[display("in progress")]
    InProgress,
    /// A mark owns a full line.
    #[display("{} wins", _0)]
    Won(Mark),
    /// Full board, no winner.
    #[display("draw")]
    Draw,
}

/// Classifies the board.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
