//! Strictly Minimax - command-line driver
//!
//! Parses boards, asks the search engine for moves and prints the results.

#![warn(missing_docs)]

mod cli;
mod play;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, Format};
use report::{BestMoveReport, InspectReport, StatsReport, emit};
use strictly_minimax::{Board, Player, SearchConfig, reachable_boards};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Command::BestMove { board } => run_best_move(&config, board, cli.format),
        Command::Inspect { board } => run_inspect(board, cli.format),
        Command::Play { human } => run_play(&config, human.map(Into::into)),
        Command::Stats => run_stats(&config, cli.format),
    }
}

/// Loads the config file, if any, and applies the command-line override.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<SearchConfig> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };

    let config = match cli.algorithm {
        Some(algorithm) => config.with_algorithm(algorithm),
        None => config,
    };

    debug!(algorithm = %config.algorithm(), "Search configured");
    Ok(config)
}

/// Print the optimal move for a board
#[instrument(skip(config))]
fn run_best_move(config: &SearchConfig, board: Board, format: Format) -> Result<()> {
    let mut search = config.searcher();
    let player = board.next_player()?;
    let (best_move, result) = search.solve(&board)?;

    let report = BestMoveReport {
        board: board.notation(),
        algorithm: *config.algorithm(),
        player,
        best_move,
        value: result.value,
        nodes: result.stats.nodes,
    };
    emit(&report, format, &mut std::io::stdout().lock())
}

/// Print every query result for a board
#[instrument]
fn run_inspect(board: Board, format: Format) -> Result<()> {
    let report = InspectReport::new(&board)?;
    emit(&report, format, &mut std::io::stdout().lock())
}

/// Play a game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &SearchConfig, human: Option<Player>) -> Result<()> {
    info!(algorithm = %config.algorithm(), ?human, "Starting game");
    let mut search = config.searcher();
    let stdin = std::io::stdin();
    play::play_game(
        search.as_mut(),
        human,
        stdin.lock(),
        &mut std::io::stdout().lock(),
    )?;
    Ok(())
}

/// Solve every reachable board and print totals
#[instrument(skip(config))]
fn run_stats(config: &SearchConfig, format: Format) -> Result<()> {
    let mut search = config.searcher();
    let boards = reachable_boards();
    let mut report = StatsReport {
        algorithm: *config.algorithm(),
        boards: boards.len(),
        ..StatsReport::default()
    };

    for board in &boards {
        if board.is_terminal() {
            report.terminal += 1;
            continue;
        }
        let result = search.search(board)?;
        match result.value {
            v if v > 0 => report.x_wins += 1,
            v if v < 0 => report.o_wins += 1,
            _ => report.draws += 1,
        }
        report.nodes += result.stats.nodes;
        report.cutoffs += result.stats.cutoffs;
        report.table_hits += result.stats.table_hits;
    }

    info!(boards = report.boards, nodes = report.nodes, "Stats complete");
    emit(&report, format, &mut std::io::stdout().lock())
}
