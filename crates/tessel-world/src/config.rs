use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::{CHUNK_SIZE, ChunkDef, Doodad, World, WorldError};

#[derive(Clone, Debug, Deserialize)]
pub struct WorldConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i32,
    #[serde(default)]
    pub chunks: Vec<ChunkConfig>,
}

fn default_chunk_size() -> i32 {
    CHUNK_SIZE
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunks: Vec::new(),
        }
    }
}

/// One chunk entry. Either an explicit `heightmap` of `(chunk_size + 1)^2`
/// samples or a uniform `elevation`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChunkConfig {
    pub grid_x: i32,
    pub grid_y: i32,
    #[serde(default)]
    pub elevation: f32,
    #[serde(default)]
    pub heightmap: Option<Vec<f32>>,
    #[serde(default)]
    pub doodads: Vec<Doodad>,
}

impl ChunkConfig {
    pub fn to_def(&self, chunk_size: i32) -> ChunkDef {
        let mut def = ChunkDef::flat(self.grid_x, self.grid_y, chunk_size, self.elevation);
        if let Some(hm) = &self.heightmap {
            def.heightmap = hm.clone();
        }
        def.with_doodads(self.doodads.clone())
    }
}

impl WorldConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn build_world(&self) -> Result<World, WorldError> {
        let mut world = World::new(self.chunk_size)?;
        for chunk in &self.chunks {
            if let Some(prev) = world.insert(chunk.to_def(self.chunk_size))? {
                log::warn!(target: "world", "duplicate config entry for chunk {}", prev.coord());
            }
        }
        log::info!(
            target: "world",
            "world built: {} chunk(s) of {}x{} tiles",
            world.len(),
            self.chunk_size,
            self.chunk_size
        );
        Ok(world)
    }
}

pub fn load_config_from_path(path: &Path) -> Result<WorldConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg = WorldConfig::from_toml_str(&s)?;
    Ok(cfg)
}
