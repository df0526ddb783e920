//! Error types.
//!
//! Board operations never fail. Errors only come from the edges where
//! outside input enters: configuration, loaded positions and command
//! parsing.

use thiserror::Error;

/// Invalid board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("spawn probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("spawn values must be positive")]
    ZeroSpawnValue,

    #[error("high spawn value {high} must be double the low value {low}")]
    UnevenSpawnValues { low: u32, high: u32 },

    #[error("spawn value {value} exceeds the largest tile value {max}")]
    SpawnValueTooLarge { value: u32, max: u32 },

    #[error("value {value} at cell {cell} is not a tile value")]
    InvalidTileValue { cell: usize, value: u32 },

    #[error("{requested} opening tiles requested but the grid holds {capacity}")]
    TooManyOpeningTiles { requested: usize, capacity: usize },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unknown direction name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown direction {input:?}, expected up, down, left or right")]
pub struct ParseDirectionError {
    pub input: String,
}
