use hashbrown::HashMap;

use crate::{ChunkCoord, ChunkDef, WorldError};

/// Sparse registry of loaded chunks keyed by grid coordinate.
///
/// Every chunk shares the world's `chunk_size`. Coordinate types hold only
/// [`ChunkCoord`] keys and resolve through [`World::get`] on each access, so a
/// chunk can be unloaded without invalidating any outstanding point value.
#[derive(Clone, Debug)]
pub struct World {
    chunk_size: i32,
    chunks: HashMap<ChunkCoord, ChunkDef>,
}

impl World {
    pub fn new(chunk_size: i32) -> Result<Self, WorldError> {
        if chunk_size <= 0 || chunk_size % 2 != 0 {
            return Err(WorldError::InvalidChunkSize(chunk_size));
        }
        Ok(Self {
            chunk_size,
            chunks: HashMap::new(),
        })
    }

    #[inline]
    pub fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    #[inline]
    pub fn get(&self, coord: ChunkCoord) -> Option<&ChunkDef> {
        self.chunks.get(&coord)
    }

    #[inline]
    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut ChunkDef> {
        self.chunks.get_mut(&coord)
    }

    #[inline]
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Loaded chunk coordinates in ascending `(gy, gx)` order.
    pub fn coords(&self) -> Vec<ChunkCoord> {
        let mut out: Vec<ChunkCoord> = self.chunks.keys().copied().collect();
        out.sort_by_key(|c| (c.gy, c.gx));
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChunkCoord, &ChunkDef)> {
        self.chunks.iter()
    }

    /// Loads a chunk, replacing and returning any chunk already at its coordinate.
    pub fn insert(&mut self, def: ChunkDef) -> Result<Option<ChunkDef>, WorldError> {
        let coord = def.coord();
        if def.size != self.chunk_size {
            log::warn!(target: "world", "rejecting chunk {} with size {}", coord, def.size);
            return Err(WorldError::SizeMismatch {
                coord,
                expected: self.chunk_size,
                found: def.size,
            });
        }
        if coord.origin_tile(self.chunk_size).is_none() {
            log::warn!(target: "world", "rejecting chunk {}: grid coordinate out of range", coord);
            return Err(WorldError::GridOutOfRange(coord));
        }
        let expected = def.expected_heightmap_len();
        if def.heightmap.len() != expected {
            log::warn!(
                target: "world",
                "rejecting chunk {}: heightmap has {} samples",
                coord,
                def.heightmap.len()
            );
            return Err(WorldError::HeightmapLength {
                coord,
                expected,
                found: def.heightmap.len(),
            });
        }
        log::debug!(target: "world", "chunk {} loaded ({} doodads)", coord, def.doodads.len());
        Ok(self.chunks.insert(coord, def))
    }

    pub fn remove(&mut self, coord: ChunkCoord) -> Option<ChunkDef> {
        let removed = self.chunks.remove(&coord);
        if removed.is_some() {
            log::debug!(target: "world", "chunk {} unloaded", coord);
        }
        removed
    }
}
