use thiserror::Error;

use crate::ChunkCoord;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    /// Chunk sizes must be positive and even so that `size / 2` centers exactly.
    #[error("invalid chunk size {0}: must be a positive even number")]
    InvalidChunkSize(i32),

    #[error("chunk {coord} has size {found}, world uses {expected}")]
    SizeMismatch {
        coord: ChunkCoord,
        expected: i32,
        found: i32,
    },

    #[error("chunk {coord} heightmap has {found} samples, expected {expected}")]
    HeightmapLength {
        coord: ChunkCoord,
        expected: usize,
        found: usize,
    },

    #[error("chunk {0} spans tiles outside the i32 range")]
    GridOutOfRange(ChunkCoord),

    #[error("chunk {0} is not loaded")]
    ChunkNotLoaded(ChunkCoord),

    #[error("chunk points belong to different chunks: {left} and {right}")]
    ChunkMismatch { left: ChunkCoord, right: ChunkCoord },

    #[error("local coordinate ({x}, {y}) is outside chunk {coord}")]
    OutOfChunk { coord: ChunkCoord, x: i32, y: i32 },
}
