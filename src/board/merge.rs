//! The merge pass over a single line.
//!
//! Input tiles are ordered nearest-to-wall first with gaps already removed.
//! Each tile is compared with its successor in the input: equal values
//! combine into one tile of double value and the pair is consumed. A tile
//! produced by a merge is never compared again in the same pass, so
//! `[5, 5, 5]` becomes `[10, 5]` and `[5, 5, 10]` becomes `[10, 10]`.
//!
//! ```
//! use five_plus::board::merge_line;
//! use five_plus::core::TileIds;
//!
//! let mut ids = TileIds::new();
//! let line = [ids.tile(5), ids.tile(5), ids.tile(5)];
//! let outcome = merge_line(&line, &mut ids);
//!
//! assert_eq!(outcome.values(), vec![10, 5]);
//! assert_eq!(outcome.score_delta, 10);
//! ```

use smallvec::SmallVec;

use crate::core::{Tile, TileIds, WIDTH};

/// Result of merging one line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Tiles after merging, nearest-to-wall first.
    pub tiles: SmallVec<[Tile; WIDTH]>,
    /// Sum of the values of newly merged tiles.
    pub score_delta: u64,
    /// Number of merges performed.
    pub merges: usize,
}

impl MergeOutcome {
    /// Tile values in output order.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.tiles.iter().map(|t| t.value).collect()
    }
}

/// Merge a compacted line.
///
/// Merged tiles get fresh identities from `ids`; tiles that pass through
/// keep theirs. The output is never longer than the input.
pub fn merge_line(line: &[Tile], ids: &mut TileIds) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    let mut i = 0;

    while i < line.len() {
        let tile = line[i];
        match line.get(i + 1) {
            Some(next) if next.value == tile.value => {
                // Boards cap starting values at MAX_TILE_VALUE, so only lines
                // built outside a board can reach the saturation point.
                let value = tile.value.saturating_mul(2);
                outcome.tiles.push(ids.tile(value));
                outcome.score_delta += u64::from(value);
                outcome.merges += 1;
                i += 2;
            }
            _ => {
                outcome.tiles.push(tile);
                i += 1;
            }
        }
    }

    outcome
}
