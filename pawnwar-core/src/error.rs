//! Error types

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Point;

/// A move request that cannot be applied to the 6x3 grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid move {from} -> {to}: point lies outside the board")]
pub struct InvalidMoveError {
    pub from: Point,
    pub to: Point,
}

/// Failure to read or parse a board source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read board file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("expected {expected} board rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("line {line}: expected {expected} cells, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unknown cell character {ch:?} (expected W, B or X)")]
    UnknownCell { line: usize, ch: char },
}

/// Top-level error for tree expansion and search
#[derive(Debug, Error)]
pub enum PawnwarError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type Result<T> = std::result::Result<T, PawnwarError>;
