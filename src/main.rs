//! # Hearthvale Preview
//!
//! Generates a world and shows it in a macroquad window. `R` rolls a new seed.

use clap::Parser;
use hearthvale::{
    config, generation::utils, GenerationConfig, HearthvaleResult, InputHandler, ViewerInput,
    WorldData, WorldGenerator, WorldPreview,
};
use log::{error, info};
use macroquad::prelude::*;

/// Command line arguments for the preview window.
#[derive(Parser, Debug)]
#[command(name = "hearthvale")]
#[command(about = "Preview procedurally generated Hearthvale worlds")]
#[command(version)]
struct Args {
    /// World seed; a random one is drawn when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// World width in tiles
    #[arg(long, default_value_t = config::DEFAULT_WORLD_WIDTH)]
    width: u32,

    /// World height in tiles
    #[arg(long, default_value_t = config::DEFAULT_WORLD_HEIGHT)]
    height: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Hearthvale")]
async fn main() -> HearthvaleResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Hearthvale preview v{}", hearthvale::VERSION);

    if let Err(e) = run_preview(&args).await {
        error!("Preview error: {}", e);
        return Err(e);
    }

    info!("Preview closed");
    Ok(())
}

/// Initializes logging for the binary.
///
/// `dev-tools` builds get a tracing subscriber, which also receives the
/// library's `log` records; plain builds use env_logger.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }
}

fn generate(args: &Args, seed: u64) -> HearthvaleResult<WorldData> {
    let config = GenerationConfig::new(seed, args.width, args.height);
    let world = WorldGenerator::new().generate_with_config(&config)?;
    info!(
        "seed {}: {} settlements, {} npcs, {} enemies",
        seed,
        world.settlements.len(),
        world.npcs.len(),
        world.enemies.len()
    );
    Ok(world)
}

async fn run_preview(args: &Args) -> HearthvaleResult<()> {
    request_new_screen_size(1024.0, 768.0);

    let input_handler = InputHandler::new();
    let mut preview = WorldPreview::new();
    let mut world = generate(args, args.seed.unwrap_or_else(utils::random_seed))?;
    preview.focus(&world);

    loop {
        for input in input_handler.poll() {
            match input {
                ViewerInput::Quit => {
                    info!("Viewer quit");
                    return Ok(());
                }
                ViewerInput::Regenerate => {
                    world = generate(args, utils::random_seed())?;
                    preview.focus(&world);
                }
                other => {
                    preview.apply(other, &world);
                }
            }
        }

        preview.render(&world);
        next_frame().await;
    }
}
