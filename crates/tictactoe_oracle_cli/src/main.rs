//! Tic-tac-toe oracle - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tictactoe_oracle::Searcher;
use tictactoe_oracle_cli::{
    Cli, Command, OracleConfig, analyze, best_move_report, parse_board, playout,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = OracleConfig::load(cli.config.as_deref())?;
    if cli.no_opening_shortcut {
        config = config.without_opening_shortcut();
    }

    init_tracing(&config);
    info!(command = ?cli.command, "Starting oracle");

    let args = cli.command.board_args();
    let board = parse_board(&args.board)
        .with_context(|| format!("Invalid board {:?}", args.board))?;
    debug!(board = %board.compact(), "Board parsed");

    let mut searcher = Searcher::new(*config.search());
    match &cli.command {
        Command::BestMove(args) => emit(&best_move_report(&mut searcher, &board), args.json),
        Command::Analyze(args) => emit(&analyze(&mut searcher, &board), args.json),
        Command::Playout(args) => emit(&playout(&mut searcher, &board), args.json),
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(config: &OracleConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter().as_deref().unwrap_or("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<R: Serialize + std::fmt::Display>(report: &R, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
