//! Core domain types for tic-tac-toe.

use crate::error::ParseBoardError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// Mark X (always moves first).
    #[display("X")]
    X,
    /// Mark O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Single-character rendering used by the text format.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board, indexed by (row, column).
///
/// Boards are plain values: every update returns a new board and leaves
/// the receiver untouched, so sibling branches of a search never see each
/// other's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from its rows.
    pub const fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Returns a copy of this board with `pos` set to `cell`.
    ///
    /// No legality checks are made; use [`crate::result`] to play a move.
    #[must_use]
    pub fn with_cell(mut self, pos: Position, cell: Cell) -> Self {
        self.cells[pos.row()][pos.col()] = cell;
        self
    }

    /// Formats the board on one line, e.g. `XO./.X./..O`.
    ///
    /// The output parses back into the same board.
    pub fn compact(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line = row
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect::<Vec<_>>()
                .join("|");
            f.write_str(&line)?;
            if r < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (either case) are marks and `.` or `_` is an empty cell.
    /// `/`, `|`, `+`, `-` and whitespace are separators, so both
    /// [`Board::compact`] and the `Display` grid parse back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '_' => Cell::Empty,
                '/' | '|' | '+' | '-' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        Ok(Position::ALL
            .into_iter()
            .zip(cells)
            .fold(Board::new(), |board, (pos, cell)| board.with_cell(pos, cell)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|&pos| board.is_empty(pos)));
        assert_eq!(board.count(Mark::X), 0);
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_with_cell_leaves_original() {
        let board = Board::new();
        let next = board.with_cell(Position::Center, Cell::Occupied(Mark::X));
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_parse_compact() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopCenter), Cell::Occupied(Mark::O));
        assert_eq!(board.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(board.get(Position::BottomRight), Cell::Occupied(Mark::O));
        assert_eq!(board.compact(), "XO./.X./..O");
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "x_o ox_ __x".parse().unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered, "X|.|O\n-+-+-\nO|X|.\n-+-+-\n.|.|X");
        assert_eq!(rendered.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO?/.../...".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar('?'))
        );
        assert_eq!(
            "XO/.../...".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(8))
        );
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
