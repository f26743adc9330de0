//! Strictly Minimax - exhaustive adversarial search for tic-tac-toe
//!
//! This library models a 3x3 tic-tac-toe board and finds the optimal move
//! for the side to move by searching the complete game tree.
//!
//! # Architecture
//!
//! - **Board model**: immutable [`Board`] values, turn derivation, legal
//!   moves, move application, win/draw detection and [`Board::utility`]
//! - **Rules**: pure functions shared by the board and the search
//! - **Search**: the [`Search`] trait with full-tree [`Minimax`],
//!   [`AlphaBeta`] pruning and a table-backed [`Memoized`] variant
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, best_move};
//!
//! # fn example() -> Result<(), strictly_minimax::GameError> {
//! let board: Board = "XX./OO./...".parse()?;
//! let mv = best_move(&board)?;
//! assert_eq!(mv, Move::new(0, 2));
//! assert_eq!(board.apply(mv)?.utility(), Some(1));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod error;
mod reachable;
mod search;
mod types;

pub mod rules;

// Crate-level exports - Board model
pub use action::Move;
pub use board::Utility;
pub use types::{Board, CELLS, Outcome, Player, SIZE, Square};

// Crate-level exports - Errors
pub use error::{ConfigError, GameError, GameErrorKind, IllegalMoveReason};

// Crate-level exports - Search
pub use search::{
    AlphaBeta, InMemoryTable, Memoized, Minimax, Search, SearchResult, SearchStats, TableEntry,
    TranspositionTable, best_move,
};

// Crate-level exports - Configuration
pub use config::{Algorithm, SearchConfig};

// Crate-level exports - State enumeration
pub use reachable::reachable_boards;
