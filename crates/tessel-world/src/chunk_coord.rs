use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer grid cell of a chunk. Chunks are centered on their grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub gx: i32,
    pub gy: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(gx: i32, gy: i32) -> Self {
        Self { gx, gy }
    }

    /// Tile coordinate of the chunk's local `(0, 0)` corner.
    ///
    /// `None` when the chunk's tile span does not fit in `i32`;
    /// [`World::insert`](crate::World::insert) refuses such chunks.
    #[inline]
    pub fn origin_tile(self, chunk_size: i32) -> Option<(i32, i32)> {
        Some((
            axis_origin(self.gx, chunk_size)?,
            axis_origin(self.gy, chunk_size)?,
        ))
    }
}

fn axis_origin(g: i32, chunk_size: i32) -> Option<i32> {
    let size = i64::from(chunk_size);
    let origin = i64::from(g) * size - size / 2;
    let last = origin + size - 1;
    if origin < i64::from(i32::MIN) || last > i64::from(i32::MAX) {
        return None;
    }
    Some(origin as i32)
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ChunkCoord> for (i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.gx, value.gy)
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.gx, self.gy)
    }
}
