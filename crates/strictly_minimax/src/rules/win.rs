//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// All eight winning lines as row-major indices: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. X is checked against every line before O, so a
/// board where both players hold a line (unreachable by legal play)
/// reports X.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    Player::iter().find(|&player| {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(player)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("XXX/OO./...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(check_winner(&board("XO./XO./X..")), Some(Player::X));
        assert_eq!(check_winner(&board("XOX/.O./XO.")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(check_winner(&board("OX./XO./X.O")), Some(Player::O));
        assert_eq!(check_winner(&board("O.X/OX./X..")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX./.../...")), None);
    }

    #[test]
    fn test_both_lines_reports_x() {
        assert_eq!(check_winner(&board("OOO/XXX/...")), Some(Player::X));
    }
}
