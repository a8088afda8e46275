//! Engine queries and their printable reports.

use derive_more::{Display, From};
use serde::{Serialize, Serializer};
use std::fmt::Write as _;
use tictactoe_oracle::{
    Board, GameStatus, InvariantViolation, Mark, ParseBoardError, Position, RankedMove,
    SearchStats, Searcher, Utility, player, status, validate,
};
use tracing::instrument;

/// Board text that cannot be used as a query.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum BoardInputError {
    /// The text is not a board.
    #[display("{}", _0)]
    Parse(ParseBoardError),

    /// The board could not arise from legal play.
    #[display("Unreachable board: {}", join_violations(_0))]
    Unreachable(Vec<InvariantViolation>),
}

impl std::error::Error for BoardInputError {}

fn join_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parses board text and rejects boards legal play cannot reach.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board, BoardInputError> {
    let board: Board = text.parse()?;
    validate(&board)?;
    Ok(board)
}

/// Answer to `best-move`.
#[derive(Debug, Clone, Serialize)]
pub struct MoveReport {
    /// Board queried, serialized in compact form.
    #[serde(serialize_with = "compact")]
    pub board: Board,
    /// Outcome of the board as given.
    pub status: GameStatus,
    /// Side to act; absent on a terminal board.
    pub to_move: Option<Mark>,
    /// Chosen move; absent on a terminal board.
    pub best_move: Option<Position>,
    /// Search counters.
    pub stats: SearchStats,
}

/// Answer to `analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Board queried, serialized in compact form.
    #[serde(serialize_with = "compact")]
    pub board: Board,
    /// Outcome of the board as given.
    pub status: GameStatus,
    /// Side to act; absent on a terminal board.
    pub to_move: Option<Mark>,
    /// Value of the board under optimal play, from X's point of view.
    pub value: Utility,
    /// Every legal move with its value.
    pub moves: Vec<RankedMove>,
    /// Search counters for the ranking.
    pub stats: SearchStats,
}

/// Answer to `playout`.
#[derive(Debug, Clone, Serialize)]
pub struct PlayoutReport {
    /// Board queried, serialized in compact form.
    #[serde(serialize_with = "compact")]
    pub board: Board,
    /// Moves in order of play.
    pub line: Vec<Position>,
    /// Board after the last move, serialized in compact form.
    #[serde(serialize_with = "compact")]
    pub final_board: Board,
    /// Outcome at the end of the line.
    pub outcome: GameStatus,
    /// Search counters summed over the line.
    pub stats: SearchStats,
}

fn compact<S: Serializer>(board: &Board, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&board.compact())
}

fn to_move(board: &Board) -> Option<Mark> {
    (status(board) == GameStatus::InProgress).then(|| player(board))
}

/// Runs `best-move`.
#[instrument(skip(searcher, board), fields(board = %board.compact()))]
pub fn best_move_report(searcher: &mut Searcher, board: &Board) -> MoveReport {
    let best_move = searcher.best_move(board);
    MoveReport {
        board: *board,
        status: status(board),
        to_move: to_move(board),
        best_move,
        stats: *searcher.stats(),
    }
}

/// Runs `analyze`.
#[instrument(skip(searcher, board), fields(board = %board.compact()))]
pub fn analyze(searcher: &mut Searcher, board: &Board) -> AnalysisReport {
    let value = searcher.evaluate(board);
    let moves = searcher.rank_moves(board);
    AnalysisReport {
        board: *board,
        status: status(board),
        to_move: to_move(board),
        value,
        moves,
        stats: *searcher.stats(),
    }
}

/// Runs `playout`.
#[instrument(skip(searcher, board), fields(board = %board.compact()))]
pub fn playout(searcher: &mut Searcher, board: &Board) -> PlayoutReport {
    let line = searcher.principal_variation(board);
    let final_board = line.iter().fold(*board, |current, &pos| {
        tictactoe_oracle::result(&current, pos).unwrap_or(current)
    });
    PlayoutReport {
        board: *board,
        line,
        final_board,
        outcome: status(&final_board),
        stats: *searcher.stats(),
    }
}

fn describe_value(value: Utility) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.to_move, self.best_move) {
            (Some(mark), Some(pos)) => write!(f, "{mark} plays {pos} ({})", pos.label()),
            _ => write!(f, "none ({})", self.status),
        }
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "status: {}", self.status)?;
        if let Some(mark) = self.to_move {
            writeln!(f, "to move: {mark}")?;
        }
        writeln!(f, "value: {} ({})", self.value, describe_value(self.value))?;

        let mut moves = String::new();
        for ranked in &self.moves {
            writeln!(
                moves,
                "  {} {:<13} {:>2} ({})",
                ranked.position,
                ranked.position.label(),
                ranked.value,
                describe_value(ranked.value)
            )?;
        }
        if !moves.is_empty() {
            writeln!(f, "moves:")?;
            f.write_str(&moves)?;
        }

        write!(
            f,
            "nodes: {}, leaves: {}, cutoffs: {}",
            self.stats.nodes(),
            self.stats.leaves(),
            self.stats.cutoffs()
        )
    }
}

impl std::fmt::Display for PlayoutReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self
            .line
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "line: {}", if line.is_empty() { "-" } else { &line })?;
        writeln!(f, "{}", self.final_board)?;
        write!(f, "outcome: {}", self.outcome)
    }
}
