//! Exact solver for 3x3 tic-tac-toe.
//!
//! The crate has two layers:
//!
//! - **Board model**: an immutable [`Board`] value plus pure queries
//!   ([`initial_state`], [`player`], [`actions`], [`result`], [`winner`],
//!   [`terminal`], [`utility`]).
//! - **Search engine**: minimax with alpha-beta pruning over the full
//!   remaining game tree ([`best_move`], [`Searcher`]).
//!
//! # Example
//!
//! ```
//! use tictactoe_oracle::{Board, Position, best_move, result};
//!
//! // X threatens the middle row; O must block at (1, 2).
//! let board: Board = "O../XX./...".parse()?;
//! let reply = best_move(&board);
//! assert_eq!(reply, Some(Position::MiddleRight));
//!
//! let next = result(&board, Position::MiddleRight)?;
//! assert_eq!(next.compact(), "O../XXO/...");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod model;
mod position;
mod search;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Cell, Mark};

/// A move is the position it fills.
pub type Move = Position;

// Crate-level exports - Errors
pub use error::{IllegalMoveError, ParseBoardError};

// Crate-level exports - Board model
pub use model::{
    DRAW, O_WINS, Utility, X_WINS, actions, initial_state, player, result, terminal, utility,
};
pub use rules::{GameStatus, is_full, status, winner};

// Crate-level exports - Board invariants
pub use invariants::{InvariantViolation, validate};

// Crate-level exports - Search engine
pub use search::{OPENING_MOVE, RankedMove, SearchConfig, SearchStats, Searcher, best_move};
