//! Command-line interface for the oracle.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe oracle - perfect-play answers for any position
#[derive(Parser, Debug)]
#[command(name = "oracle")]
#[command(about = "Exact minimax answers for 3x3 tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./oracle.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Search the empty board instead of answering the fixed opening
    #[arg(long, global = true)]
    pub no_opening_shortcut: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to act
    BestMove(BoardArgs),

    /// Print the value of every legal move
    Analyze(BoardArgs),

    /// Print the line both sides play under optimal play
    Playout(BoardArgs),
}

/// Board input shared by every command.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Board as nine cells, row-major: X, O, and . or _ for empty
    /// (e.g. "XO./.X./...")
    #[arg(short, long, default_value = ".../.../...")]
    pub board: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Command {
    /// Board arguments of the command.
    pub fn board_args(&self) -> &BoardArgs {
        match self {
            Command::BestMove(args) | Command::Analyze(args) | Command::Playout(args) => args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_move() {
        let cli = Cli::try_parse_from(["oracle", "best-move", "--board", "XX./OO./..."]).unwrap();
        assert!(matches!(cli.command, Command::BestMove(_)));
        assert_eq!(cli.command.board_args().board, "XX./OO./...");
        assert!(!cli.command.board_args().json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "oracle",
            "playout",
            "--json",
            "--no-opening-shortcut",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.no_opening_shortcut);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.command.board_args().board, ".../.../...");
        assert!(cli.command.board_args().json);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
