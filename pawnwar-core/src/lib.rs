//! PAWNWAR Core - Game engine and solver
//!
//! This crate provides the core logic for a two-player pawn race on a 6x3
//! board:
//! - Board storage and piece queries
//! - Move generation (forward steps, diagonal steps and captures)
//! - State transition and win detection
//! - Lazily expanded game tree nodes
//! - Exhaustive alpha-beta search with a structured trace
//! - Board file loading and rendering

pub mod board;
pub mod game;
pub mod tree;
pub mod search;
pub mod trace;
pub mod config;
pub mod loader;
pub mod render;
pub mod error;

// Re-exports for convenient access
pub use board::{Board, Cell, Point, CELLS, COLS, ROWS};
pub use game::{
    apply_move, diagonal_point, evaluate_terminal, forward_point, game_result, generate_moves,
    legal_moves, GameResult, Move, Side, BLACK_WIN, UNDECIDED, WHITE_WIN,
};
pub use tree::{Expansion, GameNode};
pub use search::{AlphaBetaSearch, SearchOutcome, SearchStats};
pub use trace::{NoopObserver, SearchEvent, SearchObserver, TraceRecorder};
pub use config::SearchConfig;
pub use loader::{load_board, load_board_or_default, parse_board, DEFAULT_BOARD_PATH};
pub use render::render_board;
pub use error::{InvalidMoveError, LoadError, PawnwarError};
