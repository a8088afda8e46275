//! First-class board invariants.
//!
//! Any board reached from [`crate::initial_state`] through [`crate::result`]
//! satisfies every invariant here. Boards built by hand or parsed from text
//! may not, and consumers use [`validate`] to reject them.

use crate::rules::win::line_owners;
use crate::types::{Board, Mark};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Invariant: at most one mark owns a line, and the owner moved last.
pub struct ConsistentWinner;

impl Invariant<Board> for ConsistentWinner {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        match line_owners(board).as_slice() {
            [] => true,
            [Mark::X] => x == o + 1,
            [Mark::O] => x == o,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "At most one mark owns a line and it made the last move"
    }
}

/// All board invariants.
pub type BoardInvariants = (MarkBalance, ConsistentWinner);

/// Checks that a board could have arisen from legal play.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn validate(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board).inspect_err(|violations| {
        for violation in violations {
            warn!(%violation, "Board invariant violated");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_valid() {
        assert!(validate(&Board::new()).is_ok());
    }

    #[test]
    fn test_o_ahead_violates_balance() {
        let board: Board = "O../.../...".parse().unwrap();
        assert!(!MarkBalance::holds(&board));
        let violations = validate(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MarkBalance::description());
    }

    #[test]
    fn test_x_two_ahead_violates_balance() {
        let board: Board = "XX./.../...".parse().unwrap();
        assert!(!MarkBalance::holds(&board));
    }

    #[test]
    fn test_both_winners_violates() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert!(MarkBalance::holds(&board));
        assert!(!ConsistentWinner::holds(&board));
    }

    #[test]
    fn test_x_win_with_o_to_move_is_consistent() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(validate(&board).is_ok());
    }

    #[test]
    fn test_x_win_after_o_moved_violates() {
        // X completed a line yet O moved afterwards.
        let board: Board = "XXX/OOX/O.O".parse().unwrap();
        assert!(MarkBalance::holds(&board));
        assert!(!ConsistentWinner::holds(&board));
    }

    #[test]
    fn test_x_double_line_is_consistent() {
        // X wins two lines at once with the final move.
        let board: Board = "XOX/OXO/XOX".parse().unwrap();
        assert!(validate(&board).is_ok());
    }
}
