//! # Hearthvale World Generation
//!
//! Deterministic procedural world generation for a 2D tile-based role-playing game.
//!
//! ## Architecture Overview
//!
//! A single integer seed drives a fixed pipeline of stages, each consuming the
//! output of the previous one:
//!
//! - **Biome classification**: closed-form sinusoidal noise thresholded into five biomes
//! - **Terrain**: per-biome ground cover, sparse water and an impassable border
//! - **Settlements**: non-overlapping villages, outposts and camps with buildings,
//!   a central plaza and connecting paths
//! - **Spawning**: NPCs for occupied buildings plus wilderness enemies, bosses,
//!   decorative objects and treasure chests outside settlement safe zones
//!
//! The [`WorldGenerator`] sequences the stages and returns a [`WorldData`] record
//! that the game layer owns from then on.
//!
//! ## Dialogue
//!
//! NPCs only carry an occupant type and a canned line set. Runtime conversation
//! goes through the [`DialogueProvider`] seam, which can shell out to an external
//! assistant command.

pub mod dialogue;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use dialogue::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

// Explicit re-exports for commonly used types
pub use game::{
    // From entities
    Chest,
    ChestTier,
    Enemy,
    EntityId,
    Npc,
    WorldObject,
    // From state
    WorldData,
    WorldStatistics,
    // From world
    Biome,
    Grid,
    Position,
    TileType,
};

pub use generation::{
    BiomeMap, BiomeNoise, Building, GenerationConfig, Generator, SafeZone, Settlement,
    SettlementKind, SettlementLayout, WorldGenerator,
};

/// Core error type for the Hearthvale world generator.
#[derive(thiserror::Error, Debug)]
pub enum HearthvaleError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generation parameters are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generated content violates a structural invariant
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// External dialogue provider failed
    #[error("Dialogue error: {0}")]
    Dialogue(String),
}

/// Result type used throughout the Hearthvale codebase.
pub type HearthvaleResult<T> = Result<T, HearthvaleError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// World-level configuration constants.
pub mod config {
    /// Default world width in tiles
    pub const DEFAULT_WORLD_WIDTH: u32 = 400;

    /// Default world height in tiles
    pub const DEFAULT_WORLD_HEIGHT: u32 = 400;

    /// Side length of a generated chunk in tiles
    pub const CHUNK_SIZE: u32 = 64;

    /// Distance kept between settlement footprints and the world edge
    pub const SETTLEMENT_EDGE_MARGIN: u32 = 5;

    /// Frames per second target for the preview window
    pub const TARGET_FPS: u64 = 60;
}
