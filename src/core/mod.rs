//! Core types: cells, directions, tiles, RNG, configuration, errors.
//!
//! These are the building blocks the board engine is made of. None of them
//! know about move rules.

pub mod cell;
pub mod tile;
pub mod rng;
pub mod config;
pub mod error;

pub use cell::{Cell, Direction, Line, CELL_COUNT, HEIGHT, WIDTH};
pub use tile::{Tile, TileId, TileIds};
pub use rng::{GameRng, SpawnSource};
pub use config::{BoardConfig, MAX_TILE_VALUE};
pub use error::{ConfigError, ParseDirectionError};
