//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_minimax::{Algorithm, Board, Player};

/// Strictly Minimax - optimal tic-tac-toe moves by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe moves by exhaustive game-tree search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML search configuration
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Search algorithm (overrides the config file)
    #[arg(short, long, global = true)]
    pub algorithm: Option<Algorithm>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to move
    BestMove {
        /// Board in nine-cell notation, e.g. "XX./OO./..."
        #[arg(short, long)]
        board: Board,
    },

    /// Print turn, legal moves and outcome for a board
    Inspect {
        /// Board in nine-cell notation, e.g. "XX./OO./..."
        #[arg(short, long)]
        board: Board,
    },

    /// Play a full game against the engine, or watch it play itself
    Play {
        /// Side played from stdin; the engine plays both sides if omitted
        #[arg(long, value_enum)]
        human: Option<Side>,
    },

    /// Solve every reachable board and summarize the results
    Stats,
}

/// Output format for reports.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// A side a human can take.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Play X (moves first)
    X,
    /// Play O
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_move() {
        let cli = Cli::try_parse_from([
            "strictly_minimax",
            "best-move",
            "--board",
            "XX./OO./...",
            "--algorithm",
            "minimax",
        ])
        .unwrap();

        assert_eq!(cli.algorithm, Some(Algorithm::Minimax));
        assert_eq!(cli.format, Format::Text);
        match cli.command {
            Command::BestMove { board } => assert_eq!(board.notation(), "XX.OO...."),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_malformed_board() {
        let result = Cli::try_parse_from(["strictly_minimax", "inspect", "--board", "XX"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_play_as_o_with_json() {
        let cli =
            Cli::try_parse_from(["strictly_minimax", "--format", "json", "play", "--human", "o"])
                .unwrap();
        assert_eq!(cli.format, Format::Json);
        match cli.command {
            Command::Play { human } => assert_eq!(human.map(Player::from), Some(Player::O)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        let result = Cli::try_parse_from(["strictly_minimax", "stats", "--algorithm", "mcts"]);
        assert!(result.is_err());
    }
}
