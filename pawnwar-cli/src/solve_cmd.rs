//! Solve command - load a board, search it, report the decision
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: load(), solve(), report()
//! - Level 3: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use pawnwar_core::{
    load_board_or_default, render_board, AlphaBetaSearch, Board, Move, SearchConfig, SearchEvent,
    SearchObserver, SearchOutcome, SearchStats, Side, BLACK_WIN, DEFAULT_BOARD_PATH, WHITE_WIN,
};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct SolveArgs {
    /// Board file: six lines of three characters from W, B, X
    #[arg(long, value_name = "FILE", default_value = DEFAULT_BOARD_PATH)]
    pub board: PathBuf,

    /// Print every search event
    #[arg(long)]
    pub trace: bool,

    /// Output the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the initial board before searching
    #[arg(long)]
    pub show_board: bool,
}

/// JSON report
#[derive(Serialize)]
struct Report<'a> {
    board: &'a Board,
    value: i32,
    winner: &'static str,
    best_move: Option<Move>,
    stats: SearchStats,
}

/// Prints each event as an indented line
struct TracePrinter;

impl SearchObserver for TracePrinter {
    fn on_event(&mut self, event: &SearchEvent) {
        println!("{}", format_event(event));
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run solve command
pub fn run(args: SolveArgs) -> Result<()> {
    let board = load(&args);

    tracing::info!(
        "Solving board ({} white, {} black pieces)",
        board.count_pieces(Side::White),
        board.count_pieces(Side::Black)
    );

    if args.show_board && !args.json {
        print!("{}", render_board(&board));
        println!();
    }

    let outcome = solve(board, args.trace)?;

    report(&board, &outcome, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load(args: &SolveArgs) -> Board {
    load_board_or_default(&args.board)
}

fn solve(board: Board, trace: bool) -> Result<SearchOutcome> {
    let config = SearchConfig::default();
    let outcome = if trace {
        AlphaBetaSearch::with_observer(config, TracePrinter).solve(board)
    } else {
        AlphaBetaSearch::new(config).solve(board)
    };
    outcome.context("Search aborted")
}

fn report(board: &Board, outcome: &SearchOutcome, args: &SolveArgs) -> Result<()> {
    if args.json {
        let report = Report {
            board,
            value: outcome.value,
            winner: winner_name(outcome.value),
            best_move: outcome.best_move,
            stats: outcome.stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome.best_move {
        Some(mv) => println!("Best move for White: {} to {}", mv.from, mv.to),
        None => println!("No move recorded (position already decided)"),
    }
    println!("Search value: {} ({})", outcome.value, winner_name(outcome.value));
    println!(
        "Nodes: {} visited, {} terminal, {} cutoffs, max depth {}",
        outcome.stats.nodes_visited,
        outcome.stats.terminal_nodes,
        outcome.stats.cutoffs,
        outcome.stats.max_depth
    );
    Ok(())
}

// ============================================================================
// LEVEL 3 - FORMATTING
// ============================================================================

fn winner_name(value: i32) -> &'static str {
    match value {
        WHITE_WIN => "White wins",
        BLACK_WIN => "Black wins",
        _ => "undecided",
    }
}

fn format_event(event: &SearchEvent) -> String {
    let indent = "  ".repeat(event.depth.saturating_sub(1));
    let mut line = format!(
        "{indent}{} {} = {} (alpha={}, beta={})",
        event.side,
        event.mv,
        event.value,
        format_bound(event.alpha),
        format_bound(event.beta)
    );
    if event.pruned > 0 {
        line.push_str(&format!(" pruned {}", event.pruned));
    }
    line
}

fn format_bound(bound: i32) -> String {
    match bound {
        i32::MIN => "-inf".to_string(),
        i32::MAX => "+inf".to_string(),
        v => v.to_string(),
    }
}
