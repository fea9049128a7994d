//! # worldgen
//!
//! Headless world generation: writes worlds or chunks as JSON and prints
//! statistics.

use clap::Parser;
use hearthvale::{config, generation::utils, GenerationConfig, HearthvaleResult, WorldGenerator};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "worldgen")]
#[command(about = "Generate Hearthvale worlds from the command line")]
#[command(version)]
struct Args {
    /// World width in tiles
    #[arg(long)]
    width: Option<u32>,

    /// World height in tiles
    #[arg(long)]
    height: Option<u32>,

    /// World seed; a random one is drawn when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON generation config; command line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate a single chunk of the world instead of the whole map
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    chunk: Option<Vec<i32>>,

    /// Write the world as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print world statistics as JSON
    #[arg(long)]
    stats: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> HearthvaleResult<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .format_target(false)
        .init();

    let config = build_config(&args)?;
    let world = WorldGenerator::new().generate_with_config(&config)?;

    info!(
        "generated {}x{} world (seed {}): {} settlements, {} buildings, {} npcs, {} enemies, {} bosses, {} chests",
        world.width,
        world.height,
        world.seed,
        world.settlements.len(),
        world.building_count(),
        world.npcs.len(),
        world.enemies.len(),
        world.bosses.len(),
        world.chests.len()
    );

    if let Some(path) = &args.output {
        world.save_to_file(path)?;
        info!("wrote {}", path.display());
    }

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&world.statistics())?);
    }

    Ok(())
}

fn build_config(args: &Args) -> HearthvaleResult<GenerationConfig> {
    let mut base = match &args.config {
        Some(path) => GenerationConfig::from_json_file(path)?,
        None => GenerationConfig::new(
            utils::random_seed(),
            config::DEFAULT_WORLD_WIDTH,
            config::DEFAULT_WORLD_HEIGHT,
        ),
    };
    if let Some(seed) = args.seed {
        base.seed = seed;
    }

    if let Some(coords) = &args.chunk {
        // clap guarantees exactly two values
        let chunk = GenerationConfig::for_chunk(base.seed, coords[0], coords[1])?;
        return Ok(GenerationConfig {
            seed: chunk.seed,
            width: chunk.width,
            height: chunk.height,
            origin: chunk.origin,
            biome_seed: chunk.biome_seed,
            ..base
        });
    }

    if let Some(width) = args.width {
        base.width = width;
    }
    if let Some(height) = args.height {
        base.height = height;
    }
    Ok(base)
}
