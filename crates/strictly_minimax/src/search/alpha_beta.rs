//! Minimax with alpha-beta pruning.

use super::{Search, SearchResult, SearchStats, improve};
use crate::action::Move;
use crate::board::Utility;
use crate::error::{GameError, GameErrorKind};
use crate::types::Board;
use tracing::{debug, instrument};

/// Minimax that skips siblings once they cannot affect the parent's choice.
///
/// `alpha` is the value X can already guarantee and `beta` the value O can
/// already guarantee. A node stops exploring as soon as `alpha >= beta`.
/// The root is searched with a full window, so its value and move match
/// [`Minimax`](super::Minimax) exactly.
#[derive(Debug, Default)]
pub struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    /// Creates a new alpha-beta searcher.
    pub fn new() -> Self {
        Self::default()
    }

    fn value(
        &mut self,
        board: &Board,
        mut alpha: Utility,
        mut beta: Utility,
    ) -> Result<(Utility, Option<Move>), GameError> {
        self.stats.nodes += 1;

        if let Some(utility) = board.utility() {
            return Ok((utility, None));
        }

        let player = board.next_player()?;
        let mut best = None;
        for mv in board.legal_moves() {
            let child = board.apply(mv)?;
            let (value, _) = self.value(&child, alpha, beta)?;
            best = improve(best, player, value, mv);

            if player.is_maximizing() {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best.map(|(value, mv)| (value, Some(mv)))
            .ok_or_else(|| GameErrorKind::TerminalState.into())
    }
}

impl Search for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    #[instrument(skip(self, board), fields(board = %board.notation()))]
    fn search(&mut self, board: &Board) -> Result<SearchResult, GameError> {
        board.next_player()?;
        self.stats = SearchStats::default();

        let (value, best_move) = self.value(board, Utility::MIN, Utility::MAX)?;
        debug!(
            value,
            ?best_move,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Alpha-beta search complete"
        );

        Ok(SearchResult {
            value,
            best_move,
            stats: self.stats,
        })
    }
}
