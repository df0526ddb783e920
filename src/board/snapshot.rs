//! Read model handed to the view layer.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, CELL_COUNT};

/// Everything a view needs to draw the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Tile values by cell index; `None` for empty cells.
    pub cells: [Option<u32>; CELL_COUNT],
    pub score: u64,
    pub terminal: bool,
}

impl BoardSnapshot {
    #[must_use]
    pub fn value_at(&self, cell: Cell) -> Option<u32> {
        self.cells[cell.index()]
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}
