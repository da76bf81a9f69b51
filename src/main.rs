use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tessel_world::{ChunkCoord, TilePoint, load_config_from_path};

mod inspect;

use inspect::Inspector;

#[derive(Parser, Debug)]
#[command(name = "tessel", about = "Inspect chunk addressing and walkability of a tile world")]
struct Cli {
    /// World description (TOML)
    #[arg(short, long, default_value = "worlds/demo.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List loaded chunks with their tile bounds
    Chunks,
    /// Resolve a tile to its chunk, local coordinate, elevation and walkability
    Locate {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },
    /// Print a chunk's walkability grid ('#' = blocked)
    Navmap {
        #[arg(allow_negative_numbers = true)]
        gx: i32,
        #[arg(allow_negative_numbers = true)]
        gy: i32,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("loading world config from {}", cli.config.display());
    let cfg = load_config_from_path(&cli.config)?;
    let inspector = Inspector::new(cfg.build_world()?)?;

    match cli.command {
        Command::Chunks => print!("{}", inspector.chunks_report()),
        Command::Locate { x, y } => print!("{}", inspector.locate_report(TilePoint::new(x, y))),
        Command::Navmap { gx, gy } => {
            let coord = ChunkCoord::new(gx, gy);
            match inspector.navmap_report(coord) {
                Some(map) => print!("{map}"),
                None => return Err(format!("no walkability grid for chunk {coord}").into()),
            }
        }
    }
    Ok(())
}
