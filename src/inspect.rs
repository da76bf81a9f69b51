//! Text reports over a loaded world.

use std::fmt::Write as _;

use hashbrown::HashMap;
use tessel_chunk::{CHUNK_SIZE, ChunkError, ChunkManager};
use tessel_world::{ChunkCoord, TilePoint, World};

/// A world together with a walkability manager per loaded chunk.
pub struct Inspector {
    pub world: World,
    managers: HashMap<ChunkCoord, ChunkManager>,
}

impl Inspector {
    /// Managers are only built when the world uses the shared [`CHUNK_SIZE`].
    pub fn new(world: World) -> Result<Self, ChunkError> {
        let mut managers = HashMap::new();
        if world.chunk_size() == CHUNK_SIZE {
            for (coord, def) in world.iter() {
                managers.insert(*coord, ChunkManager::new(def.clone())?);
            }
        } else {
            log::warn!(
                "world chunk size {} differs from {}; walkability unavailable",
                world.chunk_size(),
                CHUNK_SIZE
            );
        }
        Ok(Self { world, managers })
    }

    pub fn manager(&self, coord: ChunkCoord) -> Option<&ChunkManager> {
        self.managers.get(&coord)
    }

    pub fn chunks_report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} chunk(s), size {}", self.world.len(), self.world.chunk_size());
        for coord in self.world.coords() {
            match self.manager(coord) {
                Some(m) => {
                    let b = m.bounds();
                    let _ = writeln!(
                        out,
                        "chunk {coord}: tiles x {}..{} y {}..{}, {} blocked",
                        b.x(),
                        b.x() + b.width(),
                        b.y(),
                        b.y() + b.height(),
                        m.navmap().blocked_count()
                    );
                }
                None => {
                    let _ = writeln!(out, "chunk {coord}");
                }
            }
        }
        out
    }

    pub fn locate_report(&self, tile: TilePoint) -> String {
        let mut out = String::new();
        let coord = tile.chunk_coord(self.world.chunk_size());
        let _ = writeln!(out, "tile ({}, {}) -> chunk {coord}", tile.x, tile.y);
        let Some(cp) = tile.to_chunk(&self.world) else {
            let _ = writeln!(out, "chunk not loaded");
            return out;
        };
        let _ = writeln!(out, "local ({}, {})", cp.x, cp.y);
        if let Some(wp) = tile.to_world(&self.world) {
            let _ = writeln!(
                out,
                "world ({:.2}, {:.2}, {:.2})",
                wp.pos.x, wp.pos.y, wp.pos.z
            );
        }
        if let Some(walkable) = self.manager(coord).and_then(|m| m.is_walkable_tile(tile)) {
            let _ = writeln!(out, "walkable: {walkable}");
        }
        out
    }

    pub fn navmap_report(&self, coord: ChunkCoord) -> Option<String> {
        self.manager(coord).map(|m| m.navmap().to_string())
    }
}
