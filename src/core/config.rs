//! Board configuration.
//!
//! The grid shape is fixed; configuration covers how tiles are spawned.
//! Defaults match the standard game: two opening tiles, 5 with probability
//! 0.9, otherwise 10.
//!
//! ```
//! use five_plus::core::BoardConfig;
//!
//! let config = BoardConfig::default().with_seed(7);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::cell::CELL_COUNT;
use super::error::ConfigError;

/// Largest value a tile may start with. Leaves room for one doubling per
/// cell before `u32` overflows.
pub const MAX_TILE_VALUE: u32 = u32::MAX >> (CELL_COUNT + 1);

/// Spawn parameters for a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Value of a common spawn (default: 5).
    pub low_value: u32,

    /// Value of a rare spawn (default: 10). Must be double `low_value`.
    pub high_value: u32,

    /// Probability that a spawn uses `low_value` (default: 0.9).
    pub low_probability: f64,

    /// Tiles spawned by `reset` (default: 2).
    pub opening_tiles: usize,

    /// RNG seed. `None` draws a seed from entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            low_value: 5,
            high_value: 10,
            low_probability: 0.9,
            opening_tiles: 2,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Parse a config from JSON and validate it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the spawn parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.low_probability) {
            return Err(ConfigError::InvalidProbability(self.low_probability));
        }
        if self.low_value == 0 {
            return Err(ConfigError::ZeroSpawnValue);
        }
        if self.low_value.checked_mul(2) != Some(self.high_value) {
            return Err(ConfigError::UnevenSpawnValues {
                low: self.low_value,
                high: self.high_value,
            });
        }
        if self.high_value > MAX_TILE_VALUE {
            return Err(ConfigError::SpawnValueTooLarge {
                value: self.high_value,
                max: MAX_TILE_VALUE,
            });
        }
        if self.opening_tiles > CELL_COUNT {
            return Err(ConfigError::TooManyOpeningTiles {
                requested: self.opening_tiles,
                capacity: CELL_COUNT,
            });
        }
        Ok(())
    }

    /// Whether `value` belongs to the doubling progression of the spawn
    /// values, `low_value * 2^k`, and is at most `MAX_TILE_VALUE`.
    #[must_use]
    pub fn is_tile_value(&self, value: u32) -> bool {
        if value == 0 || value > MAX_TILE_VALUE {
            return false;
        }
        value.checked_rem(self.low_value) == Some(0) && (value / self.low_value).is_power_of_two()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the spawn values.
    #[must_use]
    pub fn with_values(mut self, low: u32, high: u32) -> Self {
        self.low_value = low;
        self.high_value = high;
        self
    }

    /// Set the probability of a low-value spawn.
    #[must_use]
    pub fn with_low_probability(mut self, probability: f64) -> Self {
        self.low_probability = probability;
        self
    }

    /// Set the number of tiles spawned on reset.
    #[must_use]
    pub fn with_opening_tiles(mut self, count: usize) -> Self {
        self.opening_tiles = count;
        self
    }
}
