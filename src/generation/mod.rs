//! # Generation Module
//!
//! Procedural world generation: biomes, terrain, settlements and spawns.
//!
//! Every stage is a [`Generator`] that reads the previous stage's output and
//! draws randomness from one shared, explicitly threaded [`StdRng`]. The
//! [`WorldGenerator`] runs them in order.

pub mod biomes;
pub mod buildings;
pub mod encounters;
pub mod items;
pub mod npcs;
pub mod pipeline;
pub mod settlements;
pub mod spawner;
pub mod terrain;

pub use biomes::*;
pub use buildings::*;
pub use encounters::*;
pub use items::*;
pub use npcs::*;
pub use pipeline::*;
pub use settlements::*;
pub use spawner::*;
pub use terrain::*;

use crate::game::Position;
use crate::{config, HearthvaleError, HearthvaleResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Noise backend used for biome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BiomeNoise {
    /// Three summed sinusoid layers keyed on the seed
    #[default]
    Sinusoidal,
    /// Gradient noise from the `noise` crate
    Perlin,
}

/// Configuration for world generation.
///
/// Controls world dimensions, randomness parameters and the attempt budgets of
/// every randomized search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// World width in tiles
    pub width: u32,
    /// World height in tiles
    pub height: u32,
    /// World coordinate of the grid's top-left cell (non-zero for chunks)
    pub origin: Position,
    /// Seed of the biome noise when it differs from `seed` (chunks share
    /// their world's noise field)
    pub biome_seed: Option<u64>,
    /// Noise backend for biome classification
    pub noise: BiomeNoise,
    /// Chance of a cell getting its biome's secondary ground cover (0.0 to 1.0)
    pub secondary_tile_chance: f64,
    /// Wilderness enemies per tile
    pub enemy_density: f64,
    /// Attempts per settlement placement phase
    pub placement_attempts: u32,
    /// Attempts to place each building inside a settlement
    pub building_attempts: u32,
    /// Water tiles tolerated inside a footprint during relaxed placement
    pub relaxed_water_tolerance: u32,
    /// Distance kept between settlement footprints and the world edge
    pub settlement_edge_margin: u32,
    /// Minimum distance from every safe zone center for bosses
    pub boss_exclusion_radius: f64,
    /// Attempts to place each boss
    pub boss_attempts: u32,
    /// Number of chests to scatter
    pub chest_target: u32,
    /// Distance from the nearest settlement at which chests become iron
    pub iron_chest_distance: f64,
    /// Distance from the nearest settlement at which chests become gold
    pub gold_chest_distance: f64,
}

impl GenerationConfig {
    /// Creates a configuration for a world of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearthvale::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42, 200, 150);
    /// assert_eq!(config.width, 200);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        Self {
            seed,
            width,
            height,
            origin: Position::origin(),
            biome_seed: None,
            noise: BiomeNoise::Sinusoidal,
            secondary_tile_chance: 0.15,
            enemy_density: 0.0008,
            placement_attempts: 200,
            building_attempts: 100,
            relaxed_water_tolerance: 5,
            settlement_edge_margin: config::SETTLEMENT_EDGE_MARGIN,
            boss_exclusion_radius: 80.0,
            boss_attempts: 100,
            chest_target: 15,
            iron_chest_distance: 150.0,
            gold_chest_distance: 300.0,
        }
    }

    /// Creates a configuration for testing with a small world.
    pub fn for_testing(seed: u64) -> Self {
        Self::new(seed, 100, 100)
    }

    /// Creates a configuration for one fixed-size chunk of a larger world.
    ///
    /// Fails when the chunk's world coordinates do not fit in `i32`.
    pub fn for_chunk(world_seed: u64, chunk_x: i32, chunk_y: i32) -> HearthvaleResult<Self> {
        let size = config::CHUNK_SIZE as i32;
        let corner = |chunk: i32| {
            chunk
                .checked_mul(size)
                .filter(|start| start.checked_add(size).is_some())
        };
        let (Some(x), Some(y)) = (corner(chunk_x), corner(chunk_y)) else {
            return Err(HearthvaleError::InvalidConfig(format!(
                "chunk ({}, {}) lies outside the world coordinate range",
                chunk_x, chunk_y
            )));
        };
        Ok(Self {
            origin: Position::new(x, y),
            biome_seed: Some(world_seed),
            ..Self::new(utils::chunk_seed(world_seed, chunk_x, chunk_y), size as u32, size as u32)
        })
    }

    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> HearthvaleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates that the configuration can drive a generation run.
    pub fn validate(&self) -> HearthvaleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HearthvaleError::InvalidConfig(format!(
                "world dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(HearthvaleError::InvalidConfig(format!(
                "world dimensions {}x{} exceed the coordinate range",
                self.width, self.height
            )));
        }
        let fits_x = self.origin.x.checked_add(self.width as i32).is_some();
        let fits_y = self.origin.y.checked_add(self.height as i32).is_some();
        if !fits_x || !fits_y {
            return Err(HearthvaleError::InvalidConfig(format!(
                "a {}x{} window at {:?} leaves the coordinate range",
                self.width, self.height, self.origin
            )));
        }
        if 2 * self.settlement_edge_margin as u64 >= self.width.min(self.height) as u64 {
            return Err(HearthvaleError::InvalidConfig(format!(
                "settlement_edge_margin {} leaves no room in a {}x{} world",
                self.settlement_edge_margin, self.width, self.height
            )));
        }
        if self.chest_target as u64 > self.tile_count() {
            return Err(HearthvaleError::InvalidConfig(format!(
                "chest_target {} exceeds the {} tiles of the world",
                self.chest_target,
                self.tile_count()
            )));
        }
        if !(0.0..=1.0).contains(&self.secondary_tile_chance) {
            return Err(HearthvaleError::InvalidConfig(format!(
                "secondary_tile_chance must be within [0, 1], got {}",
                self.secondary_tile_chance
            )));
        }
        if !(0.0..=1.0).contains(&self.enemy_density) {
            return Err(HearthvaleError::InvalidConfig(format!(
                "enemy_density must be within [0, 1], got {}",
                self.enemy_density
            )));
        }
        if self.placement_attempts == 0 || self.building_attempts == 0 || self.boss_attempts == 0 {
            return Err(HearthvaleError::InvalidConfig(
                "attempt budgets must be at least 1".to_string(),
            ));
        }
        if self.boss_exclusion_radius.is_nan() || self.boss_exclusion_radius < 0.0 {
            return Err(HearthvaleError::InvalidConfig(format!(
                "boss_exclusion_radius must be non-negative, got {}",
                self.boss_exclusion_radius
            )));
        }
        let tiers_ordered =
            self.iron_chest_distance >= 0.0 && self.iron_chest_distance <= self.gold_chest_distance;
        if !tiers_ordered {
            return Err(HearthvaleError::InvalidConfig(format!(
                "chest tier distances must satisfy 0 <= iron ({}) <= gold ({})",
                self.iron_chest_distance, self.gold_chest_distance
            )));
        }
        Ok(())
    }

    /// Seed of the biome noise field.
    pub fn noise_seed(&self) -> u64 {
        self.biome_seed.unwrap_or(self.seed)
    }

    /// Total number of tiles in the configured world.
    pub fn tile_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42, config::DEFAULT_WORLD_WIDTH, config::DEFAULT_WORLD_HEIGHT)
    }
}

/// Trait for the stages of the generation pipeline.
///
/// Stages borrow whatever earlier output they need and produce a fresh value,
/// drawing all randomness from the supplied generator.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> HearthvaleResult<T>;

    /// Validates that the generated content meets the stage's invariants.
    fn validate(&self, content: &T, config: &GenerationConfig) -> HearthvaleResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// SplitMix64 finalizer; spreads nearby inputs across the whole `u64` range.
    pub fn splitmix64(mut z: u64) -> u64 {
        z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Derives the seed of one chunk from the world seed and chunk coordinates.
    pub fn chunk_seed(world_seed: u64, chunk_x: i32, chunk_y: i32) -> u64 {
        let coords = ((chunk_x as u32 as u64) << 32) | chunk_y as u32 as u64;
        splitmix64(splitmix64(world_seed) ^ splitmix64(coords))
    }

    /// Picks a fresh seed when the caller did not supply one.
    pub fn random_seed() -> u64 {
        rand::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(12345, 300, 200);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.tile_count(), 60_000);
        assert_eq!(config.noise, BiomeNoise::Sinusoidal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let config = GenerationConfig::new(1, 0, 50);
        assert!(matches!(config.validate(), Err(HearthvaleError::InvalidConfig(_))));
        let config = GenerationConfig::new(1, 50, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_probabilities_are_rejected() {
        let mut config = GenerationConfig::for_testing(1);
        config.secondary_tile_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = GenerationConfig::for_testing(1);
        config.enemy_density = -0.1;
        assert!(config.validate().is_err());

        let mut config = GenerationConfig::for_testing(1);
        config.boss_exclusion_radius = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = GenerationConfig::for_testing(1);
        config.iron_chest_distance = 400.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_attempt_budget_is_rejected() {
        let mut config = GenerationConfig::for_testing(1);
        config.building_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chunk_config() {
        let config = GenerationConfig::for_chunk(99, 2, -1).unwrap();
        assert_eq!(config.width, crate::config::CHUNK_SIZE);
        assert_eq!(config.origin, Position::new(128, -64));
        assert_eq!(config.seed, utils::chunk_seed(99, 2, -1));
        assert_eq!(config.noise_seed(), 99);
        assert_eq!(GenerationConfig::for_testing(5).noise_seed(), 5);
        assert_ne!(utils::chunk_seed(99, 2, -1), utils::chunk_seed(99, -1, 2));
    }

    #[test]
    fn test_chunk_config_at_coordinate_limits() {
        let last = i32::MAX / crate::config::CHUNK_SIZE as i32 - 1;
        let config = GenerationConfig::for_chunk(1, last, i32::MIN / crate::config::CHUNK_SIZE as i32).unwrap();
        assert!(config.validate().is_ok());

        for (x, y) in [(i32::MAX, 0), (0, i32::MIN), (last + 1, 0)] {
            assert!(matches!(
                GenerationConfig::for_chunk(1, x, y),
                Err(HearthvaleError::InvalidConfig(_))
            ));
        }

        let mut config = GenerationConfig::for_testing(1);
        config.origin = Position::new(i32::MAX - 10, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_margin_and_chest_target_are_rejected() {
        let mut config = GenerationConfig::for_testing(1);
        config.settlement_edge_margin = u32::MAX;
        assert!(matches!(config.validate(), Err(HearthvaleError::InvalidConfig(_))));
        config.settlement_edge_margin = 50;
        assert!(config.validate().is_err());
        config.settlement_edge_margin = 49;
        assert!(config.validate().is_ok());

        let mut config = GenerationConfig::for_testing(1);
        config.chest_target = u32::MAX;
        assert!(matches!(config.validate(), Err(HearthvaleError::InvalidConfig(_))));
        config.chest_target = 10_000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_json_defaults_fill_missing_fields() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{ "seed": 7, "width": 120, "noise": "Perlin" }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.width, 120);
        assert_eq!(config.height, crate::config::DEFAULT_WORLD_HEIGHT);
        assert_eq!(config.noise, BiomeNoise::Perlin);
        assert_eq!(config.chest_target, 15);
    }

    #[test]
    fn test_config_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        std::fs::write(&path, r#"{ "seed": 3, "width": 0 }"#).unwrap();
        assert!(GenerationConfig::from_json_file(&path).is_err());

        std::fs::write(&path, r#"{ "seed": 3, "width": 80, "height": 60 }"#).unwrap();
        let config = GenerationConfig::from_json_file(&path).unwrap();
        assert_eq!((config.width, config.height), (80, 60));
    }

    #[test]
    fn test_utils_rng_creation() {
        let config = GenerationConfig::new(12345, 10, 10);
        let mut rng1 = utils::create_rng(&config);
        let mut rng2 = utils::create_rng(&config);
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }
}
