//! Tile, chunk-local and render-space positions.
//!
//! Chunks are centered on their grid cell: the chunk at grid `(gx, gy)` covers
//! tiles `gx * size - size / 2 .. gx * size + size / 2` on x (and likewise on
//! y), so tile `(0, 0)` sits in the middle of chunk `(0, 0)`. All offset
//! arithmetic lives in [`chunk_coord_of`], [`TilePoint::to_chunk`] and
//! [`ChunkPoint::to_tile`]; the render-space conversions compose through them.

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};
use tessel_geom::{Point, Vec3};

use crate::{ChunkCoord, World, WorldError};

/// Grid cell of the chunk owning tile `(tx, ty)`.
#[inline]
pub fn chunk_coord_of(tx: i32, ty: i32, chunk_size: i32) -> ChunkCoord {
    let size = i64::from(chunk_size);
    let half = size / 2;
    ChunkCoord::new(
        (i64::from(tx) + half).div_euclid(size) as i32,
        (i64::from(ty) + half).div_euclid(size) as i32,
    )
}

/// Absolute integer tile position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePoint {
    pub x: i32,
    pub y: i32,
}

impl TilePoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_point(p: Point<i32>) -> Self {
        Self::new(p.x, p.y)
    }

    #[inline]
    pub fn chunk_coord(self, chunk_size: i32) -> ChunkCoord {
        chunk_coord_of(self.x, self.y, chunk_size)
    }

    /// Chunk-local position, or `None` when the owning chunk is not loaded.
    pub fn to_chunk(self, world: &World) -> Option<ChunkPoint> {
        let size = world.chunk_size();
        let coord = self.chunk_coord(size);
        if !world.contains(coord) {
            return None;
        }
        // loaded chunks always have a representable origin
        let (ox, oy) = coord.origin_tile(size)?;
        Some(ChunkPoint {
            chunk: coord,
            x: (i64::from(self.x) - i64::from(ox)) as i32,
            y: (i64::from(self.y) - i64::from(oy)) as i32,
        })
    }

    /// Render-space position `(x, elevation, y)`; `None` when the chunk is not loaded.
    pub fn to_world(self, world: &World) -> Option<WorldPoint> {
        let elevation = self.elevation(world)?;
        Some(WorldPoint::new(
            f64::from(self.x),
            f64::from(elevation),
            f64::from(self.y),
        ))
    }

    pub fn elevation(self, world: &World) -> Option<f32> {
        self.to_chunk(world)?.elevation(world)
    }

    /// Writes the heightmap sample under this tile.
    ///
    /// Fails with [`WorldError::ChunkNotLoaded`] rather than dropping the write.
    pub fn set_elevation(self, world: &mut World, elevation: f32) -> Result<(), WorldError> {
        match self.to_chunk(world) {
            Some(cp) => cp.set_elevation(world, elevation),
            None => {
                let coord = self.chunk_coord(world.chunk_size());
                log::debug!(
                    target: "world",
                    "elevation write at tile ({}, {}) not applied: chunk {} not loaded",
                    self.x,
                    self.y,
                    coord
                );
                Err(WorldError::ChunkNotLoaded(coord))
            }
        }
    }

    #[inline]
    pub fn dist(self, other: TilePoint) -> f64 {
        self.as_point().dist(other.as_point())
    }

    #[inline]
    pub fn as_point(self) -> Point<i32> {
        Point::new(self.x, self.y)
    }
}

impl From<Point<i32>> for TilePoint {
    fn from(p: Point<i32>) -> Self {
        Self::from_point(p)
    }
}

impl From<TilePoint> for Point<i32> {
    fn from(t: TilePoint) -> Self {
        t.as_point()
    }
}

impl Add for TilePoint {
    type Output = TilePoint;
    #[inline]
    fn add(self, rhs: TilePoint) -> TilePoint {
        TilePoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for TilePoint {
    type Output = TilePoint;
    #[inline]
    fn sub(self, rhs: TilePoint) -> TilePoint {
        TilePoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Position relative to the corner of a specific chunk.
///
/// Holds the chunk's key, never a reference; `x`/`y` are in `[0, chunk_size)`
/// when produced by [`TilePoint::to_chunk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPoint {
    pub chunk: ChunkCoord,
    pub x: i32,
    pub y: i32,
}

impl ChunkPoint {
    #[inline]
    pub const fn new(chunk: ChunkCoord, x: i32, y: i32) -> Self {
        Self { chunk, x, y }
    }

    /// Absolute tile, or `None` when it does not fit in `i32`.
    pub fn to_tile(self, chunk_size: i32) -> Option<TilePoint> {
        let size = i64::from(chunk_size);
        let half = size / 2;
        let tx = i64::from(self.x) + i64::from(self.chunk.gx) * size - half;
        let ty = i64::from(self.y) + i64::from(self.chunk.gy) * size - half;
        Some(TilePoint::new(
            i32::try_from(tx).ok()?,
            i32::try_from(ty).ok()?,
        ))
    }

    pub fn to_world(self, world: &World) -> Option<WorldPoint> {
        self.to_tile(world.chunk_size())?.to_world(world)
    }

    /// Heightmap sample at `heightmap[y * (size + 1) + x]`; `None` if the chunk is gone.
    pub fn elevation(self, world: &World) -> Option<f32> {
        world.get(self.chunk)?.elevation_at(self.x, self.y)
    }

    pub fn set_elevation(self, world: &mut World, elevation: f32) -> Result<(), WorldError> {
        let def = world
            .get_mut(self.chunk)
            .ok_or(WorldError::ChunkNotLoaded(self.chunk))?;
        if def.set_elevation_at(self.x, self.y, elevation) {
            Ok(())
        } else {
            Err(WorldError::OutOfChunk {
                coord: self.chunk,
                x: self.x,
                y: self.y,
            })
        }
    }

    /// Component-wise sum; both operands must refer to the same chunk.
    pub fn checked_add(self, other: ChunkPoint) -> Result<ChunkPoint, WorldError> {
        self.same_chunk(other)?;
        Ok(ChunkPoint::new(self.chunk, self.x + other.x, self.y + other.y))
    }

    pub fn checked_sub(self, other: ChunkPoint) -> Result<ChunkPoint, WorldError> {
        self.same_chunk(other)?;
        Ok(ChunkPoint::new(self.chunk, self.x - other.x, self.y - other.y))
    }

    /// `None` when the points are in different chunks.
    pub fn dist(self, other: ChunkPoint) -> Option<f64> {
        self.same_chunk(other).ok()?;
        Some(self.local().dist(other.local()))
    }

    #[inline]
    pub fn local(self) -> Point<i32> {
        Point::new(self.x, self.y)
    }

    fn same_chunk(self, other: ChunkPoint) -> Result<(), WorldError> {
        if self.chunk == other.chunk {
            Ok(())
        } else {
            Err(WorldError::ChunkMismatch {
                left: self.chunk,
                right: other.chunk,
            })
        }
    }
}

/// Continuous render-space position: `pos.x`/`pos.z` follow tile x/y, `pos.y` is elevation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub pos: Vec3,
}

impl WorldPoint {
    #[inline]
    pub const fn new(x: f64, elevation: f64, z: f64) -> Self {
        Self {
            pos: Vec3::new(x, elevation, z),
        }
    }

    /// Nearest tile, rounding half up on both axes.
    ///
    /// `None` for non-finite positions or ones that round outside `i32`.
    #[inline]
    pub fn to_tile(self) -> Option<TilePoint> {
        Some(TilePoint::new(
            round_to_tile(self.pos.x)?,
            round_to_tile(self.pos.z)?,
        ))
    }

    pub fn to_chunk(self, world: &World) -> Option<ChunkPoint> {
        self.to_tile()?.to_chunk(world)
    }
}

fn round_to_tile(v: f64) -> Option<i32> {
    let r = (v + 0.5).floor();
    if !r.is_finite() || r < f64::from(i32::MIN) || r > f64::from(i32::MAX) {
        return None;
    }
    Some(r as i32)
}

impl From<Vec3> for WorldPoint {
    fn from(pos: Vec3) -> Self {
        Self { pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChunkDef;

    #[test]
    fn chunk_origin_matches_to_tile() {
        let cp = ChunkPoint::new(ChunkCoord::new(2, -3), 0, 0);
        assert_eq!(cp.to_tile(16), Some(TilePoint::new(24, -56)));
    }

    #[test]
    fn set_elevation_reports_out_of_chunk() {
        let mut world = World::new(4).unwrap();
        world.insert(ChunkDef::flat(0, 0, 4, 0.0)).unwrap();
        let cp = ChunkPoint::new(ChunkCoord::new(0, 0), 9, 0);
        assert!(matches!(
            cp.set_elevation(&mut world, 1.0),
            Err(WorldError::OutOfChunk { .. })
        ));
    }
}
