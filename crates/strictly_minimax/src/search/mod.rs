//! Adversarial search over the tic-tac-toe game tree.
//!
//! X maximizes utility and O minimizes it. Every implementation explores
//! moves in [`Board::legal_moves`] order and only replaces its current
//! best move on a strict improvement, so among equally good moves the
//! first one found wins.

mod alpha_beta;
mod memoized;
mod minimax;
mod table;

pub use alpha_beta::AlphaBeta;
pub use memoized::Memoized;
pub use minimax::Minimax;
pub use table::{InMemoryTable, TableEntry, TranspositionTable};

use crate::action::Move;
use crate::board::Utility;
use crate::error::{GameError, GameErrorKind};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including leaves and table hits.
    pub nodes: u64,
    /// Sibling lists abandoned because `alpha >= beta`.
    pub cutoffs: u64,
    /// Boards answered from a transposition table.
    pub table_hits: u64,
}

/// Value of a board under optimal play, with the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Game-theoretic utility from X's perspective.
    pub value: Utility,
    /// Optimal move for the side to move; `None` on terminal boards.
    pub best_move: Option<Move>,
    /// Search counters.
    pub stats: SearchStats,
}

/// A minimax search strategy.
///
/// Implementations may keep caches between calls, but a cache must never
/// change a result: the same board always yields the same value and move.
pub trait Search {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Searches the game tree rooted at `board`.
    ///
    /// A terminal board yields its utility and no move.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidState`] if `board` violates the
    /// mark-count invariant.
    fn search(&mut self, board: &Board) -> Result<SearchResult, GameError>;

    /// Searches a board that must still have a move, returning that move
    /// together with the full result.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidState`] if `board` violates the
    /// mark-count invariant, checked before anything else, and
    /// [`GameErrorKind::TerminalState`] if the game is already over.
    fn solve(&mut self, board: &Board) -> Result<(Move, SearchResult), GameError> {
        board.next_player()?;
        if board.is_terminal() {
            return Err(GameErrorKind::TerminalState.into());
        }
        let result = self.search(board)?;
        let mv = result.best_move.ok_or(GameErrorKind::TerminalState)?;
        Ok((mv, result))
    }

    /// Returns the optimal move for the side to move.
    ///
    /// # Errors
    ///
    /// Same as [`Search::solve`].
    fn best_move(&mut self, board: &Board) -> Result<Move, GameError> {
        self.solve(board).map(|(mv, _)| mv)
    }
}

/// Returns the optimal move for the side to move, using alpha-beta search.
///
/// # Errors
///
/// Returns [`GameErrorKind::TerminalState`] on a finished game and
/// [`GameErrorKind::InvalidState`] on a board with inconsistent mark counts.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn best_move(board: &Board) -> Result<Move, GameError> {
    AlphaBeta::new().best_move(board)
}

/// Keeps the better of `best` and a newly evaluated child.
///
/// Ties keep the earlier move.
pub(crate) fn improve(
    best: Option<(Utility, Move)>,
    player: Player,
    value: Utility,
    mv: Move,
) -> Option<(Utility, Move)> {
    match best {
        Some((best_value, _)) if !player.prefers(value, best_value) => best,
        _ => Some((value, mv)),
    }
}
