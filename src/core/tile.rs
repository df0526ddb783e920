//! Tiles and tile identity.
//!
//! A tile's position is the cell it is stored in; its `TileId` only tells
//! simultaneously existing tiles apart (a view can key animations or list
//! items on it). Merging produces a tile with a fresh id.

use serde::{Deserialize, Serialize};

/// Opaque tile identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A value-bearing token occupying one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
}

impl Tile {
    #[must_use]
    pub const fn new(id: TileId, value: u32) -> Self {
        Self { id, value }
    }
}

/// Allocator for tile identities.
///
/// Hands out increasing ids. Wraps after `u32::MAX` allocations, which
/// cannot collide in practice since at most 12 tiles are alive at once.
#[derive(Clone, Debug, Default)]
pub struct TileIds {
    next: u32,
}

impl TileIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new tile ID.
    pub fn alloc(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Allocate an id and build a tile with it.
    pub fn tile(&mut self, value: u32) -> Tile {
        Tile::new(self.alloc(), value)
    }
}
