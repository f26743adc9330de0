//! Error types for the board model and search engine.

use crate::action::Move;
use crate::types::Player;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMoveReason {
    /// The coordinates are outside the 3x3 grid.
    #[display("out of bounds")]
    OutOfBounds,
    /// The square already holds a mark.
    #[display("square already occupied by {_0}")]
    Occupied(Player),
}

/// Kinds of failure surfaced by the core.
///
/// None of these are transient: the core does no I/O, so every error is a
/// caller mistake and retrying the same call fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// The move targets an occupied or out-of-range square.
    #[display("illegal move {mv}: {reason}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
        /// Why it was rejected.
        reason: IllegalMoveReason,
    },
    /// A move was requested on a finished game.
    #[display("no move exists on a terminal board")]
    TerminalState,
    /// The board violates the mark-count invariant.
    #[display("invalid board state: {x_count} X marks and {o_count} O marks")]
    InvalidState {
        /// Number of X marks on the board.
        x_count: usize,
        /// Number of O marks on the board.
        o_count: usize,
    },
    /// Text could not be parsed into a board or move.
    #[display("parse error: {_0}")]
    Parse(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
