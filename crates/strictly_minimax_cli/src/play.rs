//! Interactive game loop: a human on stdin against the engine.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use strictly_minimax::{Board, Move, Player, Search};
use tracing::{debug, info, instrument, warn};

/// Plays one game from the empty board and returns the final board.
///
/// Moves for `human` are read from `input`, one `row col` pair per line;
/// bad or illegal input is reported and the player is asked again. Every
/// other move comes from `search`.
#[instrument(skip(search, input, out), fields(algorithm = search.name()))]
pub fn play_game<R, W>(
    search: &mut dyn Search,
    human: Option<Player>,
    mut input: R,
    out: &mut W,
) -> Result<Board>
where
    R: BufRead,
    W: Write,
{
    let mut board = Board::initial();

    while !board.is_terminal() {
        writeln!(out, "{}\n", board)?;
        let player = board.next_player()?;

        let mv = if human == Some(player) {
            prompt_move(&board, player, &mut input, out)?
        } else {
            let mv = search.best_move(&board)?;
            writeln!(out, "{} plays {}", player, mv)?;
            mv
        };

        debug!(%player, %mv, "Move applied");
        board = board.apply(mv)?;
    }

    info!(outcome = %board.outcome(), "Game finished");
    writeln!(out, "{}\n\n{}", board, board.outcome())?;
    Ok(board)
}

fn prompt_move<R, W>(board: &Board, player: Player, input: &mut R, out: &mut W) -> Result<Move>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{} to move (row col): ", player)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game finished");
        }

        match line.trim().parse::<Move>().and_then(|mv| board.apply(mv).map(|_| mv)) {
            Ok(mv) => return Ok(mv),
            Err(e) => {
                warn!(input = line.trim(), error = %e, "Rejected move");
                writeln!(out, "{}", e.kind())?;
            }
        }
    }
}
