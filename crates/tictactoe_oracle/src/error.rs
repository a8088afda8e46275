//! Error types for the board model.

use crate::position::Position;
use crate::types::Mark;

/// A move targeted a cell that already holds a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Cell {} is already occupied by {}", position, occupant)]
pub struct IllegalMoveError {
    position: Position,
    occupant: Mark,
}

impl IllegalMoveError {
    /// Creates a new illegal move error.
    pub fn new(position: Position, occupant: Mark) -> Self {
        Self { position, occupant }
    }

    /// The occupied position the move targeted.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The mark already in that cell.
    pub fn occupant(&self) -> Mark {
        self.occupant
    }
}

impl std::error::Error for IllegalMoveError {}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is neither a cell nor a separator.
    #[display("Unexpected character {:?} in board text", _0)]
    UnexpectedChar(char),

    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for ParseBoardError {}
