//! # five-plus
//!
//! Board engine for a 4x3 sliding-tile merge puzzle in the style of 2048.
//! Tiles start at 5 or 10 and double when two equal tiles slide into each
//! other.
//!
//! ## Design Principles
//!
//! 1. **Total operations**: `reset`, `spawn` and `apply_move` never fail.
//!    Spawning on a full board does nothing; game over is a flag.
//!
//! 2. **Injectable randomness**: all random draws go through `SpawnSource`.
//!    `GameRng` is seedable so whole games can be replayed.
//!
//! 3. **Position is not identity**: a tile's position is the cell it is
//!    stored in. `TileId` only tells live tiles apart.
//!
//! ## Example
//!
//! ```
//! use five_plus::{Board, Direction};
//!
//! let mut board = Board::seeded(42);
//! assert_eq!(board.tile_count(), 2);
//!
//! let report = board.apply_move(Direction::Left);
//! assert_eq!(board.score(), report.score_delta);
//! ```
//!
//! ## Modules
//!
//! - `core`: cells, directions, tiles, RNG, configuration, errors
//! - `board`: grid storage, merge pass, the `Board` engine, snapshots

pub mod core;
pub mod board;

// Re-export commonly used types
pub use crate::core::{
    Cell, Direction, Line, CELL_COUNT, HEIGHT, WIDTH,
    Tile, TileId, TileIds,
    GameRng, SpawnSource,
    BoardConfig, ConfigError, ParseDirectionError, MAX_TILE_VALUE,
};

pub use crate::board::{Board, BoardSnapshot, Grid, MergeOutcome, MoveReport, merge_line};
