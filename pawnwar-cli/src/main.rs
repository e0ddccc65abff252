//! PAWNWAR CLI - solve a board and report White's first move
//!
//! Run with no arguments to solve `board.txt` (or the standard starting
//! board if that file is missing or malformed).

mod solve_cmd;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use solve_cmd::SolveArgs;

#[derive(Parser)]
#[command(name = "pawnwar")]
#[command(about = "Exhaustive alpha-beta solver for the 6x3 pawn race")]
struct Cli {
    #[command(flatten)]
    solve: SolveArgs,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    solve_cmd::run(cli.solve)
}
