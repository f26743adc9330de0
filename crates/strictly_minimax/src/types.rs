//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::error::{GameError, GameErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// Number of squares on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Whether this player maximizes utility during search.
    pub fn is_maximizing(self) -> bool {
        matches!(self, Player::X)
    }

    /// Returns true if `candidate` is strictly better than `best` for this player.
    pub fn prefers(self, candidate: i32, best: i32) -> bool {
        if self.is_maximizing() {
            candidate > best
        } else {
            candidate < best
        }
    }

    fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            '.' | '-' | '_' => Some(Square::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: there is no setter, and every move produces a new
/// board (see [`Board::apply`]). Search code can therefore branch freely
/// without sharing state between siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates the empty starting board.
    pub fn initial() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Creates a new empty board. Same as [`Board::initial`].
    pub fn new() -> Self {
        Self::initial()
    }

    /// Creates a board from squares in row-major order.
    ///
    /// Only the shape is enforced here; mark counts are validated by
    /// [`Board::next_player`].
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given move coordinates.
    pub fn get(&self, mv: Move) -> Option<Square> {
        mv.index().map(|idx| self.squares[idx])
    }

    /// Checks if the square at `mv` is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Number of squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Base-3 encoding of the board, unique per board.
    pub fn key(&self) -> u32 {
        self.squares.iter().rev().fold(0, |acc, square| {
            let digit = match square {
                Square::Empty => 0,
                Square::Occupied(Player::X) => 1,
                Square::Occupied(Player::O) => 2,
            };
            acc * 3 + digit
        })
    }

    /// Compact nine-character notation (`X`, `O`, `.`), row-major.
    pub fn notation(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }

    /// Returns a copy with `player` placed at `index`.
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut squares = self.squares;
        squares[index] = Square::Occupied(player);
        Self { squares }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            let cells: Vec<String> = (0..SIZE)
                .map(|col| self.squares[row * SIZE + col].symbol().to_string())
                .collect();
            write!(f, "{}", cells.join("|"))?;
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses nine cell characters, ignoring whitespace, `/` and `|`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; CELLS];
        let mut filled = 0;

        for c in s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
        {
            let square = Square::from_symbol(c).ok_or_else(|| {
                GameError::from(GameErrorKind::Parse(format!("unexpected character {:?}", c)))
            })?;
            if filled == CELLS {
                return Err(GameErrorKind::Parse(format!(
                    "more than {} cells in {:?}",
                    CELLS, s
                ))
                .into());
            }
            squares[filled] = square;
            filled += 1;
        }

        if filled != CELLS {
            return Err(GameErrorKind::Parse(format!(
                "expected {} cells, found {}",
                CELLS, filled
            ))
            .into());
        }

        Ok(Self { squares })
    }
}

/// Final or current result of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Won(Player),
    /// The board is full with no line completed.
    Draw,
    /// The game is still in progress.
    Undetermined,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Undetermined => write!(f, "in progress"),
        }
    }
}
