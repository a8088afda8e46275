//! Board model: turn order, legal moves and move application.
//!
//! Every function here is pure. [`result`] is the only one that can fail,
//! and only when asked to play into an occupied cell.

use crate::error::IllegalMoveError;
use crate::invariants::{Invariant, MarkBalance};
use crate::position::Position;
use crate::rules::{is_full, winner};
use crate::types::{Board, Cell, Mark};
use tracing::{instrument, trace};

/// Outcome score from X's point of view: 1, 0 or -1.
pub type Utility = i8;

/// Utility of a board X has won.
pub const X_WINS: Utility = 1;

/// Utility of a drawn (or undecided) board.
pub const DRAW: Utility = 0;

/// Utility of a board O has won.
pub const O_WINS: Utility = -1;

/// Starting position: all nine cells empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Mark whose turn it is.
///
/// X moves on a balanced board, O once X is ahead. The answer is defined
/// for terminal boards too; check [`terminal`] separately.
pub fn player(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

/// Empty cells, in row-major order.
///
/// The order is fixed: the search breaks ties between equally good moves
/// by taking the first one found here.
pub fn actions(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}

/// Plays `player(board)`'s mark at `pos`, returning the new board.
///
/// # Errors
///
/// Returns [`IllegalMoveError`] if `pos` is already occupied.
#[instrument(skip(board), fields(board = %board.compact(), position = %pos))]
pub fn result(board: &Board, pos: Position) -> Result<Board, IllegalMoveError> {
    if let Cell::Occupied(occupant) = board.get(pos) {
        return Err(IllegalMoveError::new(pos, occupant));
    }

    let mark = player(board);
    let next = place(board, pos, mark);
    debug_assert!(
        !MarkBalance::holds(board) || MarkBalance::holds(&next),
        "{}",
        MarkBalance::description()
    );
    trace!(%mark, "Move applied");
    Ok(next)
}

/// True once someone has won or the board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Score of a board: [`X_WINS`], [`O_WINS`], or [`DRAW`] when nobody has
/// a line.
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Mark::X) => X_WINS,
        Some(Mark::O) => O_WINS,
        None => DRAW,
    }
}

/// Places `mark` on a cell known to be empty.
pub(crate) fn place(board: &Board, pos: Position, mark: Mark) -> Board {
    debug_assert!(board.is_empty(pos), "{pos} is occupied");
    board.with_cell(pos, Cell::Occupied(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_x_to_move() {
        let board = initial_state();
        assert_eq!(player(&board), Mark::X);
        assert_eq!(actions(&board), Position::ALL.to_vec());
        assert!(!terminal(&board));
    }

    #[test]
    fn test_player_follows_counts() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(player(&board), Mark::O);
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(player(&board), Mark::X);
    }

    #[test]
    fn test_player_defined_on_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(player(&board), Mark::O);
    }

    #[test]
    fn test_actions_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(
            actions(&board),
            vec![
                Position::TopCenter,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_result_places_current_mark() {
        let board = initial_state();
        let next = result(&board, Position::Center).unwrap();
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
        let next = result(&next, Position::TopLeft).unwrap();
        assert_eq!(next.get(Position::TopLeft), Cell::Occupied(Mark::O));
    }

    #[test]
    fn test_result_rejects_occupied() {
        let board: Board = ".../.X./...".parse().unwrap();
        let err = result(&board, Position::Center).unwrap_err();
        assert_eq!(err.position(), Position::Center);
        assert_eq!(err.occupant(), Mark::X);
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_utility_values() {
        assert_eq!(utility(&"XXX/OO./...".parse().unwrap()), X_WINS);
        assert_eq!(utility(&"OOO/XX./X..".parse().unwrap()), O_WINS);
        assert_eq!(utility(&"XOX/XOO/OXX".parse().unwrap()), DRAW);
    }

    #[test]
    fn test_terminal_on_win_with_empty_cells() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(terminal(&board));
        assert!(!actions(&board).is_empty());
    }
}
