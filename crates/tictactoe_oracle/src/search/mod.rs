//! Search engine: exact minimax with alpha-beta pruning.
//!
//! The tree below any 3x3 position is small enough to solve outright, so
//! there is no depth limit, no heuristic and no time budget. Every query
//! explores the remaining game to its terminal positions.

mod alphabeta;

use crate::model::{Utility, actions, initial_state, place, player, terminal};
use crate::position::Position;
use crate::types::{Board, Mark};
use alphabeta::{NEG_INF, POS_INF, search};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Opening played from the empty board without searching.
pub const OPENING_MOVE: Position = Position::TopLeft;

/// Tunables for [`Searcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct SearchConfig {
    /// Answer [`OPENING_MOVE`] on the empty board instead of searching.
    opening_shortcut: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            opening_shortcut: true,
        }
    }
}

/// Counters for the most recent query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub(crate) nodes: u64,
    /// Terminal positions visited.
    pub(crate) leaves: u64,
    /// Move loops cut short by pruning.
    pub(crate) cutoffs: u64,
}

/// A legal move with its exact minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct RankedMove {
    /// The move.
    pub position: Position,
    /// Value of the position after the move, from X's point of view.
    pub value: Utility,
}

/// Stateful front end to the search.
///
/// Holds the configuration and the counters of the last query. Each query
/// starts from fresh counters.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent query.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Optimal move for the player to act, or `None` on a terminal board.
    ///
    /// X maximizes utility and O minimizes it. Among equally good moves the
    /// first in row-major order is chosen.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        self.stats = SearchStats::default();

        if terminal(board) {
            debug!("Terminal board, no move");
            return None;
        }

        let side = player(board);
        if self.config.opening_shortcut && side == Mark::X && *board == initial_state() {
            debug!(position = %OPENING_MOVE, "Opening shortcut");
            return Some(OPENING_MOVE);
        }

        let (value, best) = search(board, NEG_INF, POS_INF, side, &mut self.stats);
        debug!(
            %side,
            value,
            position = ?best,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search complete"
        );
        best
    }

    /// Game-theoretic value of `board` under optimal play by both sides.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn evaluate(&mut self, board: &Board) -> Utility {
        self.stats = SearchStats::default();
        let (value, _) = search(board, NEG_INF, POS_INF, player(board), &mut self.stats);
        debug!(value, nodes = self.stats.nodes, "Evaluation complete");
        value
    }

    /// Every legal move with its exact value, in row-major order.
    ///
    /// Each move is searched with a full window, so values are exact rather
    /// than bounds. Counters accumulate over all moves. Empty on a terminal
    /// board.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn rank_moves(&mut self, board: &Board) -> Vec<RankedMove> {
        self.stats = SearchStats::default();

        if terminal(board) {
            return Vec::new();
        }

        let side = player(board);
        let ranked: Vec<RankedMove> = actions(board)
            .into_iter()
            .map(|pos| {
                let child = place(board, pos, side);
                let (value, _) =
                    search(&child, NEG_INF, POS_INF, side.opponent(), &mut self.stats);
                RankedMove::new(pos, value)
            })
            .collect();

        debug!(moves = ranked.len(), nodes = self.stats.nodes, "Ranking complete");
        ranked
    }

    /// Moves played when both sides follow [`Searcher::best_move`] until
    /// the game ends. Empty on a terminal board.
    ///
    /// Counters cover the whole line.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn principal_variation(&mut self, board: &Board) -> Vec<Position> {
        let mut line = Vec::new();
        let mut total = SearchStats::default();
        let mut current = *board;

        while let Some(pos) = self.best_move(&current) {
            total.nodes += self.stats.nodes;
            total.leaves += self.stats.leaves;
            total.cutoffs += self.stats.cutoffs;

            current = place(&current, pos, player(&current));
            line.push(pos);
        }

        self.stats = total;
        debug!(length = line.len(), "Principal variation complete");
        line
    }
}

/// Optimal move for the player to act, or `None` on a terminal board.
///
/// Shorthand for [`Searcher::best_move`] with the default configuration.
pub fn best_move(board: &Board) -> Option<Position> {
    Searcher::default().best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DRAW, O_WINS, X_WINS};

    #[test]
    fn test_opening_shortcut_skips_search() {
        let mut searcher = Searcher::default();
        assert_eq!(searcher.best_move(&initial_state()), Some(Position::TopLeft));
        assert_eq!(*searcher.stats().nodes(), 0);
    }

    #[test]
    fn test_without_shortcut_searches_empty_board() {
        let mut searcher = Searcher::new(SearchConfig::default().with_opening_shortcut(false));
        assert_eq!(searcher.best_move(&initial_state()), Some(Position::TopLeft));
        assert_eq!(*searcher.stats().nodes(), 18_297);
    }

    #[test]
    fn test_stats_reset_between_queries() {
        let mut searcher = Searcher::default();
        let board: Board = "X../.../...".parse().unwrap();
        searcher.best_move(&board);
        let first = *searcher.stats();
        searcher.best_move(&board);
        assert_eq!(*searcher.stats(), first);
        assert!(first.nodes > 0);
    }

    #[test]
    fn test_evaluate_known_positions() {
        let mut searcher = Searcher::default();
        assert_eq!(searcher.evaluate(&initial_state()), DRAW);
        // O answered a corner with an adjacent edge: X forces a win.
        assert_eq!(searcher.evaluate(&"XO./.../...".parse().unwrap()), X_WINS);
        // O to move and completes the middle row.
        assert_eq!(searcher.evaluate(&"XX./OO./X..".parse().unwrap()), O_WINS);
    }

    #[test]
    fn test_rank_moves_after_corner_opening() {
        let mut searcher = Searcher::default();
        let board: Board = "X../.../...".parse().unwrap();
        let ranked = searcher.rank_moves(&board);
        assert_eq!(ranked.len(), 8);
        // Only the center holds the draw for O.
        let drawing: Vec<Position> = ranked
            .iter()
            .filter(|m| m.value == DRAW)
            .map(|m| m.position)
            .collect();
        assert_eq!(drawing, vec![Position::Center]);
        assert!(ranked.iter().all(|m| m.value == DRAW || m.value == X_WINS));
    }

    #[test]
    fn test_rank_moves_terminal_is_empty() {
        let mut searcher = Searcher::default();
        assert!(searcher.rank_moves(&"XXX/OO./...".parse().unwrap()).is_empty());
    }

    #[test]
    fn test_principal_variation_from_start() {
        let mut searcher = Searcher::default();
        let line = searcher.principal_variation(&initial_state());
        assert_eq!(
            line,
            vec![
                Position::TopLeft,
                Position::Center,
                Position::TopCenter,
                Position::TopRight,
                Position::BottomLeft,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
        assert!(*searcher.stats().nodes() > 0);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert!(*config.opening_shortcut());
        let config: SearchConfig =
            serde_json::from_str(r#"{"opening_shortcut": false}"#).unwrap();
        assert!(!*config.opening_shortcut());
    }
}
