//! Fixed-size cell storage.
//!
//! Tiles live in a `[Option<Tile>; CELL_COUNT]` indexed by `Cell::index`,
//! so every lookup is a direct array access.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, Tile, CELL_COUNT, WIDTH};

/// The 4x3 grid of optional tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [Option<Tile>; CELL_COUNT],
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&Tile> {
        self.cells[cell.index()].as_ref()
    }

    /// Place a tile, returning whatever was there before.
    pub fn set(&mut self, cell: Cell, tile: Tile) -> Option<Tile> {
        self.cells[cell.index()].replace(tile)
    }

    /// Remove and return the tile at a cell.
    pub fn take(&mut self, cell: Cell) -> Option<Tile> {
        self.cells[cell.index()].take()
    }

    /// Remove every tile.
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// Empty cells in index order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Cell; CELL_COUNT]> {
        Cell::all().filter(|&c| self.is_empty(c)).collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Occupied cells and their tiles, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Tile)> {
        Cell::all().filter_map(move |c| self.get(c).map(|t| (c, t)))
    }

    /// Tile values by cell index.
    #[must_use]
    pub fn values(&self) -> [Option<u32>; CELL_COUNT] {
        self.cells.map(|c| c.map(|t| t.value))
    }

    /// Whether any two horizontally or vertically adjacent tiles share a value.
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        self.iter().any(|(cell, tile)| {
            [cell.right(), cell.below()]
                .into_iter()
                .flatten()
                .any(|n| self.get(n).is_some_and(|other| other.value == tile.value))
        })
    }

    /// Tiles along a line, in line order, skipping empty cells.
    #[must_use]
    pub fn collect_line(&self, line: &[Cell]) -> SmallVec<[Tile; WIDTH]> {
        line.iter().filter_map(|&c| self.get(c).copied()).collect()
    }

    /// Write tiles into a line from its start; the rest of the line is cleared.
    ///
    /// Tiles beyond the line's length are dropped, which cannot happen for
    /// the output of a merge pass over the same line.
    pub fn write_line(&mut self, line: &[Cell], tiles: &[Tile]) {
        for (i, &cell) in line.iter().enumerate() {
            self.cells[cell.index()] = tiles.get(i).copied();
        }
    }
}
