//! The board engine: moves, spawning, scoring and terminal detection.
//!
//! ## Move sequence
//!
//! `apply_move` always runs the same steps:
//!
//! 1. For each line in the direction of motion, collect its tiles from the
//!    destination wall outward, run the merge pass, and write the result
//!    back against the wall.
//! 2. Replace the grid with the union of all lines and add the merge score.
//! 3. Spawn one tile.
//! 4. Run terminal detection.
//!
//! Steps 3 and 4 run even when step 1 changed nothing, so a move into a
//! packed wall still spawns a tile.
//!
//! ## Terminal detection
//!
//! Only a full board can be terminal, and only when no two adjacent tiles
//! share a value. A board with an empty cell is never terminal.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::grid::Grid;
use super::merge::merge_line;
use super::snapshot::BoardSnapshot;
use crate::core::{
    BoardConfig, Cell, ConfigError, Direction, GameRng, SpawnSource, Tile, TileIds, CELL_COUNT,
};

/// Summary of one move.
///
/// Callers may ignore it and read the board back instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub direction: Direction,
    /// Score gained from merges.
    pub score_delta: u64,
    /// Number of merges across all lines.
    pub merges: usize,
    /// Whether any tile changed position or merged before the spawn.
    pub moved: bool,
    /// Cell of the tile spawned after the move, `None` if the board was full.
    pub spawned: Option<Cell>,
}

/// A single game board.
///
/// Generic over the random source so tests can script spawns. Production
/// code uses the default `GameRng`.
#[derive(Clone, Debug)]
pub struct Board<R = GameRng> {
    grid: Grid,
    score: u64,
    terminal: bool,
    config: BoardConfig,
    ids: TileIds,
    rng: R,
}

impl Board<GameRng> {
    /// Create a board and start a game.
    ///
    /// Seeds from `config.seed`, or from entropy when it is `None`.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_source(config, rng)
    }

    /// Create a board with the default config and the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::start(BoardConfig::default().with_seed(seed), GameRng::new(seed))
    }

    /// Create a board with the default config and an entropy seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let rng = GameRng::from_entropy();
        Self::start(BoardConfig::default().with_seed(rng.seed()), rng)
    }
}

impl<R: SpawnSource> Board<R> {
    /// Create a board drawing from `rng` and start a game.
    ///
    /// `config.seed` is ignored; the source is used as given.
    pub fn with_source(config: BoardConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, rng))
    }

    fn start(config: BoardConfig, rng: R) -> Self {
        let mut board = Self {
            grid: Grid::new(),
            score: 0,
            terminal: false,
            config,
            ids: TileIds::new(),
            rng,
        };
        board.reset();
        board
    }

    /// Start a new game: clear the grid and score, then spawn the opening tiles.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.terminal = false;

        for _ in 0..self.config.opening_tiles {
            self.spawn();
        }

        debug!(tiles = self.grid.tile_count(), "board reset");
    }

    /// Place one random tile on a random empty cell.
    ///
    /// Returns `None` without drawing from the source when the board is full.
    pub fn spawn(&mut self) -> Option<(Cell, Tile)> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            debug!("board full, spawn skipped");
            return None;
        }

        let cell = empty[self.rng.pick_index(empty.len())];
        let value = if self.rng.chance(self.config.low_probability) {
            self.config.low_value
        } else {
            self.config.high_value
        };

        let tile = self.ids.tile(value);
        self.grid.set(cell, tile);
        debug!(%cell, value, "tile spawned");

        Some((cell, tile))
    }

    /// Slide and merge every line toward `direction`, then spawn and
    /// re-check terminal state.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        let mut next = Grid::new();
        let mut score_delta = 0;
        let mut merges = 0;

        for line in direction.lines() {
            let tiles = self.grid.collect_line(&line);
            let outcome = merge_line(&tiles, &mut self.ids);
            next.write_line(&line, &outcome.tiles);
            score_delta += outcome.score_delta;
            merges += outcome.merges;
        }

        let moved = next != self.grid;
        self.grid = next;
        self.score += score_delta;

        let spawned = self.spawn().map(|(cell, _)| cell);
        self.update_terminal();

        debug!(
            %direction,
            score_delta,
            merges,
            moved,
            score = self.score,
            "move applied"
        );

        MoveReport {
            direction,
            score_delta,
            merges,
            moved,
            spawned,
        }
    }

    /// Replace the grid with the given values, keeping the score.
    ///
    /// Every tile gets a fresh identity; `None` and zero entries are empty.
    /// Each value must be a tile value for this board's config (see
    /// `BoardConfig::is_tile_value`); otherwise the board is left unchanged.
    /// Terminal state is recomputed. Used to set up puzzles and test
    /// positions.
    pub fn load_values(
        &mut self,
        values: &[Option<u32>; CELL_COUNT],
    ) -> Result<(), ConfigError> {
        for cell in Cell::all() {
            if let Some(value) = values[cell.index()].filter(|&v| v > 0) {
                if !self.config.is_tile_value(value) {
                    return Err(ConfigError::InvalidTileValue {
                        cell: cell.index(),
                        value,
                    });
                }
            }
        }

        self.grid.clear();
        for cell in Cell::all() {
            if let Some(value) = values[cell.index()].filter(|&v| v > 0) {
                let tile = self.ids.tile(value);
                self.grid.set(cell, tile);
            }
        }
        self.update_terminal();
        Ok(())
    }

    fn update_terminal(&mut self) {
        let was_terminal = self.terminal;
        self.terminal = self.grid.is_full() && !self.grid.has_adjacent_pair();

        if self.terminal && !was_terminal {
            info!(score = self.score, "board is terminal");
        }
    }
}

impl<R> Board<R> {
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Occupied cells and their tiles, in index order.
    pub fn tiles(&self) -> impl Iterator<Item = (Cell, &Tile)> {
        self.grid.iter()
    }

    #[must_use]
    pub fn tile_at(&self, cell: Cell) -> Option<&Tile> {
        self.grid.get(cell)
    }

    #[must_use]
    pub fn value_at(&self, cell: Cell) -> Option<u32> {
        self.grid.get(cell).map(|t| t.value)
    }

    /// Tile values by cell index.
    #[must_use]
    pub fn values(&self) -> [Option<u32>; CELL_COUNT] {
        self.grid.values()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Game over: the board is full and no adjacent tiles match.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.grid.tile_count()
    }

    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Cell; CELL_COUNT]> {
        self.grid.empty_cells()
    }

    /// Highest tile value, `None` on an empty board.
    #[must_use]
    pub fn max_tile(&self) -> Option<u32> {
        self.grid.iter().map(|(_, t)| t.value).max()
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The random source.
    #[must_use]
    pub fn source(&self) -> &R {
        &self.rng
    }

    /// Mutable access to the random source, for queueing draws on a
    /// scripted source between moves.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Current state for the view layer.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self.grid.values(),
            score: self.score,
            terminal: self.terminal,
        }
    }
}
