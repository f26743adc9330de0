//! Board queries and move application.

use crate::action::Move;
use crate::error::{GameError, GameErrorKind, IllegalMoveReason};
use crate::rules;
use crate::types::{Board, Outcome, Player, Square};

/// Numeric game-theoretic value of a terminal board, from X's perspective.
pub type Utility = i32;

impl Board {
    /// Returns the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidState`] if the mark counts could not
    /// arise from legal play.
    pub fn next_player(&self) -> Result<Player, GameError> {
        rules::next_player(self)
    }

    /// All empty squares, in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.squares()
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .filter_map(|(index, _)| Move::from_index(index))
            .collect()
    }

    /// Returns a new board with the next player's mark placed at `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::IllegalMove`] if `mv` is off the board or
    /// occupied, and [`GameErrorKind::InvalidState`] if the board's mark
    /// counts are inconsistent.
    pub fn apply(&self, mv: Move) -> Result<Board, GameError> {
        let index = mv.index().ok_or(GameErrorKind::IllegalMove {
            mv,
            reason: IllegalMoveReason::OutOfBounds,
        })?;

        if let Square::Occupied(owner) = self.squares()[index] {
            return Err(GameErrorKind::IllegalMove {
                mv,
                reason: IllegalMoveReason::Occupied(owner),
            }
            .into());
        }

        let player = self.next_player()?;
        Ok(self.with_mark(index, player))
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True when a player has won or no empty square remains.
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// +1 if X won, -1 if O won, 0 for a draw; `None` while the game is
    /// still in progress.
    pub fn utility(&self) -> Option<Utility> {
        match self.outcome() {
            Outcome::Won(Player::X) => Some(1),
            Outcome::Won(Player::O) => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::Undetermined => None,
        }
    }

    /// Classifies the board as won, drawn or in progress.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Won(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Undetermined,
        }
    }
}
