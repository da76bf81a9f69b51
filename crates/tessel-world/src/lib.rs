//! Chunked world registry and the tile/chunk/world coordinate spaces.
#![forbid(unsafe_code)]

mod chunk_coord;
mod chunk_def;
pub mod config;
mod error;
mod points;
mod world;

pub use chunk_coord::ChunkCoord;
pub use chunk_def::{ChunkDef, Doodad, heightmap_len};
pub use config::{ChunkConfig, WorldConfig, load_config_from_path};
pub use error::WorldError;
pub use points::{ChunkPoint, TilePoint, WorldPoint, chunk_coord_of};
pub use world::World;

/// Default edge length of a chunk in tiles.
pub const CHUNK_SIZE: i32 = 16;
