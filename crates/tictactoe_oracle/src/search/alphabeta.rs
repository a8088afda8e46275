//! Alpha-beta minimax over the full remaining game tree.

use super::SearchStats;
use crate::model::{Utility, actions, place, terminal, utility};
use crate::position::Position;
use crate::types::{Board, Mark};

/// Stands in for negative infinity; below every utility.
pub(crate) const NEG_INF: Utility = Utility::MIN;

/// Stands in for positive infinity; above every utility.
pub(crate) const POS_INF: Utility = Utility::MAX;

/// Searches `board` with `side` to move inside the window `(alpha, beta)`.
///
/// X maximizes and O minimizes. Returns the node's value and the move that
/// produced it, `None` at terminal nodes. A node records a move only when
/// its running value strictly improves its own bound (alpha for X, beta
/// for O), so among equal values the first one found in row-major order
/// wins, and a node that never beats the bound it inherited records none.
pub(crate) fn search(
    board: &Board,
    mut alpha: Utility,
    mut beta: Utility,
    side: Mark,
    stats: &mut SearchStats,
) -> (Utility, Option<Position>) {
    stats.nodes += 1;

    if terminal(board) {
        stats.leaves += 1;
        return (utility(board), None);
    }

    let maximizing = side == Mark::X;
    let mut value = if maximizing { NEG_INF } else { POS_INF };
    let mut best = None;

    for action in actions(board) {
        let child = place(board, action, side);
        let (child_value, _) = search(&child, alpha, beta, side.opponent(), stats);

        if maximizing {
            value = value.max(child_value);
            if value > alpha {
                alpha = value;
                best = Some(action);
            }
        } else {
            value = value.min(child_value);
            if value < beta {
                beta = value;
                best = Some(action);
            }
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    (value, best)
}
