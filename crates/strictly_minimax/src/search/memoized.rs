//! Full-tree minimax backed by a transposition table.

use super::table::{InMemoryTable, TableEntry, TranspositionTable};
use super::{Search, SearchResult, SearchStats, improve};
use crate::error::{GameError, GameErrorKind};
use crate::types::Board;
use tracing::{debug, instrument};

/// Minimax that solves each distinct board once.
///
/// Only exact values are stored, so results are identical to
/// [`Minimax`](super::Minimax). The table outlives individual searches;
/// later searches reuse everything solved earlier.
#[derive(Debug, Default)]
pub struct Memoized<T = InMemoryTable> {
    table: T,
    stats: SearchStats,
}

impl Memoized<InMemoryTable> {
    /// Creates a searcher with an empty in-memory table.
    pub fn new() -> Self {
        Self::with_table(InMemoryTable::with_capacity(6_000))
    }
}

impl<T: TranspositionTable> Memoized<T> {
    /// Creates a searcher over a caller-supplied table.
    pub fn with_table(table: T) -> Self {
        Self {
            table,
            stats: SearchStats::default(),
        }
    }

    /// Returns the underlying table.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Forgets every solved board.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    fn value(&mut self, board: &Board) -> Result<TableEntry, GameError> {
        self.stats.nodes += 1;

        let key = board.key();
        if let Some(entry) = self.table.get(key) {
            self.stats.table_hits += 1;
            return Ok(entry);
        }

        let entry = match board.utility() {
            Some(value) => TableEntry {
                value,
                best_move: None,
            },
            None => {
                let player = board.next_player()?;
                let mut best = None;
                for mv in board.legal_moves() {
                    let child = board.apply(mv)?;
                    let value = self.value(&child)?.value;
                    best = improve(best, player, value, mv);
                }
                let (value, mv) = best.ok_or(GameErrorKind::TerminalState)?;
                TableEntry {
                    value,
                    best_move: Some(mv),
                }
            }
        };

        self.table.put(key, entry);
        Ok(entry)
    }
}

impl<T: TranspositionTable> Search for Memoized<T> {
    fn name(&self) -> &'static str {
        "memoized"
    }

    #[instrument(skip(self, board), fields(board = %board.notation()))]
    fn search(&mut self, board: &Board) -> Result<SearchResult, GameError> {
        board.next_player()?;
        self.stats = SearchStats::default();

        let entry = self.value(board)?;
        debug!(
            value = entry.value,
            best_move = ?entry.best_move,
            nodes = self.stats.nodes,
            table_hits = self.stats.table_hits,
            table_len = self.table.len(),
            "Memoized search complete"
        );

        Ok(SearchResult {
            value: entry.value,
            best_move: entry.best_move,
            stats: self.stats,
        })
    }
}
