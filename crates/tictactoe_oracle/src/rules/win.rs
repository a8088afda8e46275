//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark owning the first complete line in [`LINES`] order.
///
/// Within a line X is tested before O. A reachable board has at most one
/// winner, so the order only matters for hand-built boards.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

/// Marks that own at least one full line, X first.
pub fn line_owners(board: &Board) -> Vec<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .filter(|&mark| {
            LINES
                .iter()
                .any(|line| line_owner(board, line) == Some(mark))
        })
        .collect()
}

fn line_owner(board: &Board, [a, b, c]: &[Position; 3]) -> Option<Mark> {
    [Mark::X, Mark::O].into_iter().find(|&mark| {
        let cell = Cell::Occupied(mark);
        board.get(*a) == cell && board.get(*b) == cell && board.get(*c) == cell
    })
}
