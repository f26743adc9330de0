//! Reports printed by the CLI, as text or JSON.

use crate::cli::Format;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use strictly_minimax::{Algorithm, Board, Move, Outcome, Player, Utility};

/// Writes `report` to `out` in the requested format.
pub fn emit<T, W>(report: &T, format: Format, out: &mut W) -> anyhow::Result<()>
where
    T: Serialize + fmt::Display,
    W: Write,
{
    match format {
        Format::Text => writeln!(out, "{}", report)?,
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(report)?)?,
    }
    Ok(())
}

/// Result of the `best-move` command.
#[derive(Debug, Serialize)]
pub struct BestMoveReport {
    /// Board in nine-cell notation.
    pub board: String,
    /// Algorithm that produced the move.
    pub algorithm: Algorithm,
    /// Side to move.
    pub player: Player,
    /// Optimal move.
    pub best_move: Move,
    /// Game-theoretic value of the board.
    pub value: Utility,
    /// Boards visited.
    pub nodes: u64,
}

impl fmt::Display for BestMoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} to move: play {}", self.player, self.best_move)?;
        write!(
            f,
            "value {} ({}, {} nodes)",
            describe_value(self.value),
            self.algorithm,
            self.nodes
        )
    }
}

/// Result of the `inspect` command.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// Board in nine-cell notation.
    pub board: String,
    /// Side to move.
    pub next_player: Player,
    /// Empty squares in row-major order.
    pub legal_moves: Vec<Move>,
    /// Player holding a complete line.
    pub winner: Option<Player>,
    /// Whether the game is over.
    pub terminal: bool,
    /// Utility, present only on terminal boards.
    pub utility: Option<Utility>,
    /// Won, drawn or in progress.
    pub outcome: Outcome,
    #[serde(skip)]
    grid: Board,
}

impl InspectReport {
    /// Queries every board property.
    pub fn new(board: &Board) -> anyhow::Result<Self> {
        Ok(Self {
            board: board.notation(),
            next_player: board.next_player()?,
            legal_moves: board.legal_moves(),
            winner: board.winner(),
            terminal: board.is_terminal(),
            utility: board.utility(),
            outcome: board.outcome(),
            grid: *board,
        })
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.grid)?;
        writeln!(f)?;
        writeln!(f, "outcome: {}", self.outcome)?;
        if let Some(utility) = self.utility {
            writeln!(f, "utility: {}", utility)?;
        }
        if !self.terminal {
            writeln!(f, "to move: {}", self.next_player)?;
        }
        let moves: Vec<String> = self.legal_moves.iter().map(Move::to_string).collect();
        write!(f, "empty:   {}", moves.join(" "))
    }
}

/// Result of the `stats` command.
#[derive(Debug, Default, Serialize)]
pub struct StatsReport {
    /// Algorithm used.
    pub algorithm: Algorithm,
    /// Reachable boards, terminal ones included.
    pub boards: usize,
    /// Reachable boards where the game is over.
    pub terminal: usize,
    /// Non-terminal boards X wins with optimal play.
    pub x_wins: usize,
    /// Non-terminal boards O wins with optimal play.
    pub o_wins: usize,
    /// Non-terminal boards drawn with optimal play.
    pub draws: usize,
    /// Boards visited across all searches.
    pub nodes: u64,
    /// Alpha-beta cutoffs across all searches.
    pub cutoffs: u64,
    /// Transposition-table hits across all searches.
    pub table_hits: u64,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "algorithm:  {}", self.algorithm)?;
        writeln!(
            f,
            "boards:     {} ({} terminal)",
            self.boards, self.terminal
        )?;
        writeln!(
            f,
            "solved:     {} X wins, {} O wins, {} draws",
            self.x_wins, self.o_wins, self.draws
        )?;
        write!(
            f,
            "work:       {} nodes, {} cutoffs, {} table hits",
            self.nodes, self.cutoffs, self.table_hits
        )
    }
}

fn describe_value(value: Utility) -> &'static str {
    match value {
        v if v > 0 => "+1 (X wins)",
        v if v < 0 => "-1 (O wins)",
        _ => "0 (draw)",
    }
}
