//! Per-chunk ownership and walkability derivation.
#![forbid(unsafe_code)]

mod grid;
mod manager;

pub use grid::{Walkability, WalkabilityGrid};
pub use manager::ChunkManager;

use tessel_geom::GeomError;
use tessel_world::ChunkCoord;
use thiserror::Error;

/// Edge length shared by every chunk a [`ChunkManager`] accepts.
pub const CHUNK_SIZE: i32 = tessel_world::CHUNK_SIZE;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkError {
    #[error("chunk {coord} has size {found}, expected {expected}")]
    SizeMismatch {
        coord: ChunkCoord,
        expected: i32,
        found: i32,
    },

    #[error("chunk {0} spans tiles outside the i32 range")]
    GridOutOfRange(ChunkCoord),

    #[error("doodad #{index} at ({x}, {y}) lies outside chunk {coord} of size {size}")]
    DoodadOutOfBounds {
        coord: ChunkCoord,
        index: usize,
        x: i32,
        y: i32,
        size: i32,
    },

    #[error(transparent)]
    Geom(#[from] GeomError),
}
