//! Enumeration of every board reachable by legal play.

use crate::types::Board;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Returns every board reachable from the empty board, in discovery order.
///
/// Terminal boards are included but not expanded. Each board appears once
/// even when several move orders lead to it.
#[instrument]
pub fn reachable_boards() -> Vec<Board> {
    let start = Board::initial();
    let mut seen = HashSet::from([start.key()]);
    let mut boards = vec![start];
    let mut stack = vec![start];

    while let Some(board) = stack.pop() {
        if board.is_terminal() {
            continue;
        }
        for mv in board.legal_moves() {
            let child = match board.apply(mv) {
                Ok(child) => child,
                Err(e) => {
                    warn!(board = %board.notation(), %mv, error = %e, "Skipping unplayable move");
                    continue;
                }
            };
            if seen.insert(child.key()) {
                boards.push(child);
                stack.push(child);
            }
        }
    }

    debug!(count = boards.len(), "Enumerated reachable boards");
    boards
}
