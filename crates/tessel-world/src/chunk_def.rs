use serde::{Deserialize, Serialize};

use crate::ChunkCoord;

/// A placed object inside a chunk, in chunk-local tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Doodad {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub walkable: bool,
}

impl Doodad {
    #[inline]
    pub const fn new(x: i32, y: i32, walkable: bool) -> Self {
        Self { x, y, walkable }
    }

    #[inline]
    pub const fn blocking(x: i32, y: i32) -> Self {
        Self::new(x, y, false)
    }
}

/// Number of heightmap samples for a chunk of `size` tiles: one per tile corner.
#[inline]
pub const fn heightmap_len(size: i32) -> usize {
    if size < 0 {
        return 0;
    }
    let side = (size + 1) as usize;
    side * side
}

/// Static per-chunk data as delivered by the loading layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChunkDef {
    pub grid_x: i32,
    pub grid_y: i32,
    pub size: i32,
    /// `(size + 1)^2` samples, row-major over `y` then `x`.
    pub heightmap: Vec<f32>,
    #[serde(default)]
    pub doodads: Vec<Doodad>,
}

impl ChunkDef {
    /// A chunk with a uniform heightmap and no doodads.
    pub fn flat(grid_x: i32, grid_y: i32, size: i32, elevation: f32) -> Self {
        Self {
            grid_x,
            grid_y,
            size,
            heightmap: vec![elevation; heightmap_len(size)],
            doodads: Vec::new(),
        }
    }

    pub fn with_doodads(mut self, doodads: Vec<Doodad>) -> Self {
        self.doodads = doodads;
        self
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        ChunkCoord::new(self.grid_x, self.grid_y)
    }

    #[inline]
    pub fn expected_heightmap_len(&self) -> usize {
        heightmap_len(self.size)
    }

    /// Index of corner sample `(x, y)`; corners run over `0..=size` on each axis.
    #[inline]
    pub fn heightmap_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x > self.size || y > self.size {
            return None;
        }
        let idx = (y * (self.size + 1) + x) as usize;
        (idx < self.heightmap.len()).then_some(idx)
    }

    #[inline]
    pub fn elevation_at(&self, x: i32, y: i32) -> Option<f32> {
        self.heightmap_index(x, y).map(|i| self.heightmap[i])
    }

    /// Returns false when `(x, y)` is outside the heightmap.
    pub fn set_elevation_at(&mut self, x: i32, y: i32, elevation: f32) -> bool {
        match self.heightmap_index(x, y) {
            Some(i) => {
                self.heightmap[i] = elevation;
                true
            }
            None => false,
        }
    }
}
