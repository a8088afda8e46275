//! Command-line front end for the tic-tac-toe oracle.
//!
//! The binary parses a board, asks the engine about it and prints the
//! answer. It holds no game logic of its own.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;

pub use cli::{BoardArgs, Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, OracleConfig};
pub use report::{
    AnalysisReport, BoardInputError, MoveReport, PlayoutReport, analyze, best_move_report,
    parse_board, playout,
};
