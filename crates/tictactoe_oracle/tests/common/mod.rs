//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use tictactoe_oracle::{Board, actions, initial_state, result, terminal};

/// Every board reachable from the empty board by legal play.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if terminal(&board) {
            continue;
        }
        for pos in actions(&board) {
            stack.push(result(&board, pos).expect("actions are legal"));
        }
    }

    boards
}

/// Parses a board, panicking on bad test input.
pub fn board(text: &str) -> Board {
    text.parse().expect("valid board text")
}
