//! Turn derivation from mark counts.

use crate::error::{GameError, GameErrorKind};
use crate::types::{Board, Player};
use tracing::warn;

/// Returns the player whose turn it is.
///
/// X moves first, so X is to move whenever the counts are equal and O is
/// to move when X is exactly one ahead. Any other difference cannot come
/// from legal play.
///
/// # Errors
///
/// Returns [`GameErrorKind::InvalidState`] if O has more marks than X or
/// X leads by more than one.
pub fn next_player(board: &Board) -> Result<Player, GameError> {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);

    match x_count.checked_sub(o_count) {
        Some(0) => Ok(Player::X),
        Some(1) => Ok(Player::O),
        _ => {
            warn!(x_count, o_count, "Board violates mark-count invariant");
            Err(GameErrorKind::InvalidState { x_count, o_count }.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(next_player(&Board::initial()).unwrap(), Player::X);
    }

    #[test]
    fn test_o_moves_after_x() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(next_player(&board).unwrap(), Player::O);
    }

    #[test]
    fn test_x_moves_when_counts_equal() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(next_player(&board).unwrap(), Player::X);
    }

    #[test]
    fn test_rejects_o_ahead() {
        let board: Board = "O........".parse().unwrap();
        let err = next_player(&board).unwrap_err();
        assert_eq!(
            err.kind(),
            &GameErrorKind::InvalidState {
                x_count: 0,
                o_count: 1
            }
        );
    }

    #[test]
    fn test_rejects_x_two_ahead() {
        let board: Board = "XX.......".parse().unwrap();
        assert!(matches!(
            next_player(&board).unwrap_err().kind(),
            GameErrorKind::InvalidState { .. }
        ));
    }
}
