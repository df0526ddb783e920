//! The board engine.
//!
//! - `grid`: fixed-size cell storage and adjacency queries
//! - `merge`: the pure merge pass over one line
//! - `engine`: `Board`, which runs moves, spawns and terminal detection
//! - `snapshot`: the read model a view renders from

pub mod grid;
pub mod merge;
pub mod engine;
pub mod snapshot;

pub use grid::Grid;
pub use merge::{merge_line, MergeOutcome};
pub use engine::{Board, MoveReport};
pub use snapshot::BoardSnapshot;
