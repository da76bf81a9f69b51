use tessel_geom::{Point, Rectangle};
use tessel_world::{ChunkCoord, ChunkDef, Doodad, TilePoint};

use crate::{CHUNK_SIZE, ChunkError, WalkabilityGrid};

/// Owns one chunk's definition and the walkability grid derived from it.
///
/// The grid is built on construction and again on every [`rebuild`]. Doodad
/// edits made through the manager mark it dirty until the next rebuild.
///
/// [`rebuild`]: ChunkManager::rebuild
#[derive(Clone, Debug)]
pub struct ChunkManager {
    def: ChunkDef,
    navmap: WalkabilityGrid,
    bounds: Rectangle,
    dirty: bool,
}

impl ChunkManager {
    pub fn new(def: ChunkDef) -> Result<Self, ChunkError> {
        let coord = def.coord();
        if def.size != CHUNK_SIZE {
            log::warn!(target: "chunk", "rejecting chunk {}: size {}", coord, def.size);
            return Err(ChunkError::SizeMismatch {
                coord,
                expected: CHUNK_SIZE,
                found: def.size,
            });
        }
        let Some(offset) = offset_of(coord) else {
            log::warn!(target: "chunk", "rejecting chunk {}: grid coordinate out of range", coord);
            return Err(ChunkError::GridOutOfRange(coord));
        };
        let navmap = build_navmap(&def)?;
        let bounds = Rectangle::new(offset.x, offset.y, CHUNK_SIZE, CHUNK_SIZE)?;
        Ok(Self {
            def,
            navmap,
            bounds,
            dirty: false,
        })
    }

    #[inline]
    pub const fn chunk_size() -> i32 {
        CHUNK_SIZE
    }

    #[inline]
    pub fn def(&self) -> &ChunkDef {
        &self.def
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.def.coord()
    }

    /// The cached grid; may lag the doodad list while [`is_dirty`](Self::is_dirty).
    #[inline]
    pub fn navmap(&self) -> &WalkabilityGrid {
        &self.navmap
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Regenerates the grid from the current doodad list.
    ///
    /// On error the previous grid is kept and the manager stays dirty.
    pub fn rebuild(&mut self) -> Result<(), ChunkError> {
        self.navmap = build_navmap(&self.def)?;
        self.dirty = false;
        Ok(())
    }

    pub fn add_doodad(&mut self, doodad: Doodad) {
        self.def.doodads.push(doodad);
        self.dirty = true;
    }

    /// Removes every doodad at local `(x, y)` and returns how many were removed.
    pub fn remove_doodads_at(&mut self, x: i32, y: i32) -> usize {
        let before = self.def.doodads.len();
        self.def.doodads.retain(|d| d.x != x || d.y != y);
        let removed = before - self.def.doodads.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    /// Tile coordinate of the chunk's local `(0, 0)` corner.
    #[inline]
    pub fn world_offset(&self) -> Point<i32> {
        self.bounds.origin()
    }

    #[inline]
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    #[inline]
    pub fn contains_point(&self, p: Point<i32>) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    pub fn is_walkable_local(&self, lx: i32, ly: i32) -> Option<bool> {
        self.navmap.is_walkable(lx, ly)
    }

    /// Walkability of an absolute tile; `None` for tiles this chunk does not own.
    pub fn is_walkable_tile(&self, tile: TilePoint) -> Option<bool> {
        let p = tile.as_point();
        if !self.contains_point(p) {
            return None;
        }
        let local = p - self.world_offset();
        self.is_walkable_local(local.x, local.y)
    }
}

fn offset_of(coord: ChunkCoord) -> Option<Point<i32>> {
    coord.origin_tile(CHUNK_SIZE).map(Point::from)
}

fn build_navmap(def: &ChunkDef) -> Result<WalkabilityGrid, ChunkError> {
    let coord = def.coord();
    match WalkabilityGrid::from_doodads(coord, def.size, &def.doodads) {
        Ok(grid) => {
            log::debug!(
                target: "chunk",
                "navmap built for chunk {}: {} of {} tiles blocked",
                coord,
                grid.blocked_count(),
                grid.size() * grid.size()
            );
            Ok(grid)
        }
        Err(e) => {
            log::warn!(target: "chunk", "navmap rejected: {}", e);
            Err(e)
        }
    }
}
