//! Full-tree minimax.

use super::{Search, SearchResult, SearchStats, improve};
use crate::action::Move;
use crate::board::Utility;
use crate::error::{GameError, GameErrorKind};
use crate::types::Board;
use tracing::{debug, instrument};

/// Exhaustive minimax: visits every board below the root.
#[derive(Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    /// Creates a new full-tree searcher.
    pub fn new() -> Self {
        Self::default()
    }

    fn value(&mut self, board: &Board) -> Result<(Utility, Option<Move>), GameError> {
        self.stats.nodes += 1;

        if let Some(utility) = board.utility() {
            return Ok((utility, None));
        }

        let player = board.next_player()?;
        let mut best = None;
        for mv in board.legal_moves() {
            let child = board.apply(mv)?;
            let (value, _) = self.value(&child)?;
            best = improve(best, player, value, mv);
        }

        best.map(|(value, mv)| (value, Some(mv)))
            .ok_or_else(|| GameErrorKind::TerminalState.into())
    }
}

impl Search for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    #[instrument(skip(self, board), fields(board = %board.notation()))]
    fn search(&mut self, board: &Board) -> Result<SearchResult, GameError> {
        board.next_player()?;
        self.stats = SearchStats::default();

        let (value, best_move) = self.value(board)?;
        debug!(value, ?best_move, nodes = self.stats.nodes, "Minimax search complete");

        Ok(SearchResult {
            value,
            best_move,
            stats: self.stats,
        })
    }
}
