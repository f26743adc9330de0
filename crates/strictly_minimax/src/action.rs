//! Move coordinates.
//!
//! A move is just a target square. Whose mark lands there is derived from
//! the board it is applied to, so a move carries no player.

use crate::error::{GameError, GameErrorKind};
use crate::types::SIZE;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Zero-based row/column coordinates of a square.
///
/// Coordinates are not range-checked on construction; applying an
/// out-of-range move fails with an illegal-move error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major board index, or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < SIZE && self.col < SIZE).then_some(self.row * SIZE + self.col)
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then_some(Self::new(index / SIZE, index % SIZE))
    }
}

impl FromStr for Move {
    type Err = GameError;

    /// Parses `"r c"` or `"r,c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let [row, col] = parts.as_slice() else {
            return Err(GameErrorKind::Parse(format!("expected \"row col\", got {:?}", s)).into());
        };

        let parse = |part: &str| {
            part.parse::<usize>().map_err(|e| {
                GameError::from(GameErrorKind::Parse(format!(
                    "bad coordinate {:?}: {}",
                    part, e
                )))
            })
        };

        Ok(Self::new(parse(*row)?, parse(*col)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..9 {
            let mv = Move::from_index(index).unwrap();
            assert_eq!(mv.index(), Some(index));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_out_of_range_has_no_index() {
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(0, 3).index(), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("1 2".parse::<Move>().unwrap(), Move::new(1, 2));
        assert_eq!("0,2".parse::<Move>().unwrap(), Move::new(0, 2));
        assert_eq!(" 2 , 0 ".parse::<Move>().unwrap(), Move::new(2, 0));
        assert!("1".parse::<Move>().is_err());
        assert!("a b".parse::<Move>().is_err());
        assert!("1 2 3".parse::<Move>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(0, 2).to_string(), "(0, 2)");
    }
}
