//! Board files
//!
//! A board file holds exactly six lines of three characters each: `W` for a
//! white piece, `B` for a black piece, `X` for an empty cell. Row 0 comes
//! first.

use std::path::Path;

use tracing::{info, warn};

use crate::board::{Board, Cell, COLS, ROWS};
use crate::error::LoadError;

/// Board file read when none is named
pub const DEFAULT_BOARD_PATH: &str = "board.txt";

/// Parse a board from its text form.
///
/// Surrounding whitespace on a line and trailing blank lines are ignored.
pub fn parse_board(text: &str) -> Result<Board, LoadError> {
    let lines: Vec<&str> = text
        .trim_end()
        .lines()
        .map(str::trim)
        .collect();
    if lines.len() != ROWS {
        return Err(LoadError::RowCount {
            expected: ROWS,
            found: lines.len(),
        });
    }

    let mut cells = [[Cell::Empty; COLS]; ROWS];
    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != COLS {
            return Err(LoadError::RowWidth {
                line: row + 1,
                expected: COLS,
                found,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            cells[row][col] = Cell::from_char(ch).ok_or(LoadError::UnknownCell { line: row + 1, ch })?;
        }
    }
    Ok(Board::from_rows(cells))
}

/// Read and parse a board file
pub fn load_board(path: &Path) -> Result<Board, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_board(&text)
}

/// Read a board file, falling back to the standard position on any failure
pub fn load_board_or_default(path: &Path) -> Board {
    match load_board(path) {
        Ok(board) => {
            info!("Loaded board from {}", path.display());
            board
        }
        Err(err) => {
            warn!("{err}; using the standard starting board");
            Board::standard()
        }
    }
}
