//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and drivers share a single definition.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use turn::next_player;
pub use win::{LINES, check_winner};
