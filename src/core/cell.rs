//! Grid addressing and move directions.
//!
//! ## Layout
//!
//! The board is a fixed 4-column by 3-row grid. Cells are addressed by a
//! linear index `column + row * WIDTH`:
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! ```
//!
//! ## Lines
//!
//! A move processes the board one line at a time: the 4 columns for
//! vertical moves, the 3 rows for horizontal moves. Each line is listed
//! starting at the wall the tiles slide toward.
//!
//! ```
//! use five_plus::core::{Cell, Direction};
//!
//! let lines = Direction::Down.lines();
//! assert_eq!(lines.len(), 4);
//! assert_eq!(lines[0].as_slice(), &[Cell::at(0, 2), Cell::at(0, 1), Cell::at(0, 0)]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::ParseDirectionError;

/// Number of columns.
pub const WIDTH: usize = 4;

/// Number of rows.
pub const HEIGHT: usize = 3;

/// Total number of cells.
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Cells of one row or column, ordered from the destination wall outward.
pub type Line = SmallVec<[Cell; WIDTH]>;

/// One addressable grid position, `0..CELL_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Create a cell from a linear index.
    ///
    /// Returns `None` if the index is outside the grid.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create a cell from column and row.
    ///
    /// Returns `None` if either coordinate is outside the grid.
    #[must_use]
    pub const fn from_coords(column: usize, row: usize) -> Option<Self> {
        if column < WIDTH && row < HEIGHT {
            Some(Self((column + row * WIDTH) as u8))
        } else {
            None
        }
    }

    /// Create a cell from in-range coordinates.
    ///
    /// Panics if the coordinates are outside the grid. Meant for literals
    /// and loops bounded by `WIDTH` / `HEIGHT`.
    #[must_use]
    pub const fn at(column: usize, row: usize) -> Self {
        assert!(column < WIDTH && row < HEIGHT, "cell out of range");
        Self((column + row * WIDTH) as u8)
    }

    /// Iterate over every cell in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }

    /// Linear index, `column + row * WIDTH`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn column(self) -> usize {
        self.0 as usize % WIDTH
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / WIDTH
    }

    /// The cell to the right, if any.
    #[must_use]
    pub const fn right(self) -> Option<Cell> {
        Cell::from_coords(self.column() + 1, self.row())
    }

    /// The cell below, if any.
    #[must_use]
    pub const fn below(self) -> Option<Cell> {
        Cell::from_coords(self.column(), self.row() + 1)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({}, {})", self.column(), self.row())
    }
}

/// One of the four directional moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    #[must_use]
    pub const fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Lines processed by a move in this direction.
    ///
    /// Vertical moves yield the columns left to right, horizontal moves
    /// yield the rows top to bottom. Each line starts at the wall the
    /// tiles slide toward.
    #[must_use]
    pub fn lines(self) -> SmallVec<[Line; WIDTH]> {
        match self {
            Direction::Up => (0..WIDTH)
                .map(|column| (0..HEIGHT).map(|row| Cell::at(column, row)).collect::<Line>())
                .collect(),
            Direction::Down => (0..WIDTH)
                .map(|column| (0..HEIGHT).rev().map(|row| Cell::at(column, row)).collect::<Line>())
                .collect(),
            Direction::Left => (0..HEIGHT)
                .map(|row| (0..WIDTH).map(|column| Cell::at(column, row)).collect::<Line>())
                .collect(),
            Direction::Right => (0..HEIGHT)
                .map(|row| (0..WIDTH).rev().map(|column| Cell::at(column, row)).collect::<Line>())
                .collect(),
        }
    }

    /// Lowercase command name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::all()
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError {
                input: s.to_string(),
            })
    }
}
