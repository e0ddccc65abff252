//! Board geometry and cell storage
//!
//! The board is a fixed 6x3 grid. Row 0 is White's goal edge and row 5 is
//! Black's goal edge, so White advances toward decreasing rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::game::Side;

/// Number of rows on the board
pub const ROWS: usize = 6;

/// Number of columns on the board
pub const COLS: usize = 3;

/// Total number of cells
pub const CELLS: usize = ROWS * COLS;

// ============================================================================
// CELL
// ============================================================================

/// Contents of a single board cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    /// Character used by board files and the renderer
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => 'X',
            Cell::White => 'W',
            Cell::Black => 'B',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' => Some(Cell::Empty),
            'W' => Some(Cell::White),
            'B' => Some(Cell::Black),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Cell::White,
            Side::Black => Cell::Black,
        }
    }
}

// ============================================================================
// POINT
// ============================================================================

/// Board coordinate (row, column)
///
/// Signed so that a step off the edge can be represented before it is
/// rejected; a `Point` is not guaranteed to lie on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: i8,
    pub col: i8,
}

impl Point {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this point is on the board
    pub fn is_on_board(&self) -> bool {
        (0..ROWS as i8).contains(&self.row) && (0..COLS as i8).contains(&self.col)
    }

    /// Point displaced by (drow, dcol), or `None` if that leaves the board
    pub fn offset(&self, drow: i8, dcol: i8) -> Option<Point> {
        let target = Point::new(self.row.checked_add(drow)?, self.col.checked_add(dcol)?);
        target.is_on_board().then_some(target)
    }

    fn from_index(index: usize) -> Self {
        Point::new((index / COLS) as i8, (index % COLS) as i8)
    }

    fn index(&self) -> Option<usize> {
        self.is_on_board()
            .then(|| self.row as usize * COLS + self.col as usize)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Fixed-size 6x3 grid (copy to branch)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Board with every cell empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position: rows 0-1 Black, rows 4-5 White
    pub fn standard() -> Self {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, line) in cells.iter_mut().enumerate() {
            let fill = match row {
                0 | 1 => Cell::Black,
                4 | 5 => Cell::White,
                _ => Cell::Empty,
            };
            line.fill(fill);
        }
        Self { cells }
    }

    pub fn from_rows(cells: [[Cell; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Cell at `point`, or `None` if the point is off the board
    pub fn get(&self, point: Point) -> Option<Cell> {
        let i = point.index()?;
        Some(self.cells[i / COLS][i % COLS])
    }

    pub fn cell_mut(&mut self, point: Point) -> Option<&mut Cell> {
        let i = point.index()?;
        Some(&mut self.cells[i / COLS][i % COLS])
    }

    /// Builder-style placement for assembling positions by hand.
    ///
    /// Points off the board are ignored; use [`Board::cell_mut`] when the
    /// caller needs to know whether a point was placed.
    pub fn with(mut self, point: Point, cell: Cell) -> Self {
        if let Some(slot) = self.cell_mut(point) {
            *slot = cell;
        }
        self
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }

    /// Number of pieces belonging to `side`
    pub fn count_pieces(&self, side: Side) -> usize {
        self.count(Cell::from(side))
    }

    /// True if `side` has a piece on the row it is racing toward
    pub fn has_piece_at_goal_row(&self, side: Side) -> bool {
        self.cells[side.goal_row()].contains(&Cell::from(side))
    }

    /// Points in the order `side` sweeps for movable pieces.
    ///
    /// White scans row-major from (0, 0); Black scans from the last cell
    /// backward. The order fixes child ordering and therefore which of two
    /// equally good root moves is reported.
    pub fn scan(side: Side) -> impl Iterator<Item = Point> {
        (0..CELLS).map(move |i| match side {
            Side::White => Point::from_index(i),
            Side::Black => Point::from_index(CELLS - 1 - i),
        })
    }

    /// Positions of all pieces owned by `side`, in scan order
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Point> + '_ {
        let marker = Cell::from(side);
        Self::scan(side).filter(move |&p| self.get(p) == Some(marker))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::loader::parse_board(s)
    }
}
