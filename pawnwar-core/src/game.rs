//! Sides, move generation, state transition and win detection

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Point, ROWS};
use crate::error::InvalidMoveError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Search value of a position White has won
pub const WHITE_WIN: i32 = 1;

/// Search value of a position Black has won
pub const BLACK_WIN: i32 = -1;

/// Search value of a position that is not yet decided
pub const UNDECIDED: i32 = 0;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of one step forward
    pub fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row this side wins by reaching
    pub fn goal_row(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => ROWS - 1,
        }
    }

    /// White maximizes the search value, Black minimizes it
    pub fn is_maximizing(self) -> bool {
        self == Side::White
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// A committed move of one piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Point,
    pub to: Point,
}

impl Move {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
}

impl GameResult {
    /// Search value of this result
    pub fn value(self) -> i32 {
        match self {
            GameResult::Ongoing => UNDECIDED,
            GameResult::WhiteWins => WHITE_WIN,
            GameResult::BlackWins => BLACK_WIN,
        }
    }
}

// ============================================================================
// MOVE GENERATION
// ============================================================================

/// Straight step toward the opponent's edge; only onto an empty cell
pub fn forward_point(board: &Board, from: Point, side: Side) -> Option<Point> {
    let target = from.offset(side.forward(), 0)?;
    (board.get(target)? == Cell::Empty).then_some(target)
}

/// Diagonal step toward the opponent's edge.
///
/// `leftward` means toward column 0 for both sides. Lands on an empty cell or
/// captures an opposing piece; a cell held by the mover's own side is
/// rejected.
pub fn diagonal_point(board: &Board, from: Point, side: Side, leftward: bool) -> Option<Point> {
    let dcol = if leftward { -1 } else { 1 };
    let target = from.offset(side.forward(), dcol)?;
    (board.get(target)? != Cell::from(side)).then_some(target)
}

/// All destinations for the piece at `from`: diagonal-left, forward,
/// diagonal-right, in that order
pub fn generate_moves(board: &Board, from: Point, side: Side) -> Vec<Point> {
    [
        diagonal_point(board, from, side, true),
        forward_point(board, from, side),
        diagonal_point(board, from, side, false),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Every legal move for `side`, in the side's scan order
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces(side)
        .flat_map(|from| {
            generate_moves(board, from, side)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

// ============================================================================
// STATE TRANSITION
// ============================================================================

/// Copy of `board` with `side`'s piece moved from `from` to `to`.
///
/// Whatever occupied `to` is overwritten. Legality is the generator's
/// concern; only points off the grid are rejected.
pub fn apply_move(board: &Board, from: Point, to: Point, side: Side) -> Result<Board, InvalidMoveError> {
    if !from.is_on_board() || !to.is_on_board() {
        return Err(InvalidMoveError { from, to });
    }

    let mut next = *board;
    if let Some(cell) = next.cell_mut(to) {
        *cell = Cell::from(side);
    }
    if let Some(cell) = next.cell_mut(from) {
        *cell = Cell::Empty;
    }
    Ok(next)
}

// ============================================================================
// WIN DETECTION
// ============================================================================

/// Decide whether the position is over.
///
/// Capture-out is checked before goal rows, and White's goal row before
/// Black's, so a degenerate board won by both sides reports White.
pub fn game_result(board: &Board) -> GameResult {
    if board.count_pieces(Side::Black) == 0 {
        GameResult::WhiteWins
    } else if board.count_pieces(Side::White) == 0 {
        GameResult::BlackWins
    } else if board.has_piece_at_goal_row(Side::White) {
        GameResult::WhiteWins
    } else if board.has_piece_at_goal_row(Side::Black) {
        GameResult::BlackWins
    } else {
        GameResult::Ongoing
    }
}

/// `WHITE_WIN`, `BLACK_WIN` or `UNDECIDED` for the position
pub fn evaluate_terminal(board: &Board) -> i32 {
    game_result(board).value()
}

// ============================================================================
// TESTS
// ============================================================================
