//! Human-readable board rendering

use crate::board::Board;

/// One bracketed character per cell, one board row per line, row 0 first
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in board.rows() {
        for cell in row {
            out.push('[');
            out.push(cell.to_char());
            out.push(']');
        }
        out.push('\n');
    }
    out
}
