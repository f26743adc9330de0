//! Transposition tables keyed by [`Board::key`](crate::Board::key).

use crate::action::Move;
use crate::board::Utility;
use std::collections::HashMap;

/// Exact search result stored for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Game-theoretic value from X's perspective.
    pub value: Utility,
    /// Optimal move, `None` for terminal boards.
    pub best_move: Option<Move>,
}

/// Storage for already-solved boards.
pub trait TranspositionTable {
    /// Looks up a solved board.
    fn get(&self, key: u32) -> Option<TableEntry>;
    /// Records a solved board.
    fn put(&mut self, key: u32, entry: TableEntry);
    /// Number of stored boards.
    fn len(&self) -> usize;
    /// Whether the table is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Drops every entry.
    fn clear(&mut self);
}

/// `HashMap`-backed table. Tic-tac-toe has fewer than 6,000 reachable
/// boards, so no replacement policy is needed.
#[derive(Debug, Default)]
pub struct InMemoryTable {
    map: HashMap<u32, TableEntry>,
}

impl InMemoryTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `cap` boards.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity(cap),
        }
    }
}

impl TranspositionTable for InMemoryTable {
    fn get(&self, key: u32) -> Option<TableEntry> {
        self.map.get(&key).copied()
    }

    fn put(&mut self, key: u32, entry: TableEntry) {
        self.map.insert(key, entry);
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}
