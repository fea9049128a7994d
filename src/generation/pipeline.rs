//! # World Generation Pipeline
//!
//! Sequences the generation stages and assembles the final [`WorldData`].
//!
//! Stages run in a fixed order against one random stream seeded from the
//! configuration:
//!
//! 1. [`BiomeGenerator`] classifies every cell (no randomness consumed)
//! 2. [`TerrainGenerator`] lays ground cover, water and the border
//! 3. [`SettlementPlacer`] places settlements, buildings and paths
//! 4. [`EntitySpawner`] places NPCs, enemies, bosses, objects and chests
//!
//! The partial entry points replay a prefix of that order, so their output is
//! identical to the corresponding part of a full run with the same seed.

use crate::game::{Grid, Position, TileType, WorldData};
use crate::generation::{
    utils, BiomeGenerator, BiomeMap, EntitySpawner, GenerationConfig, Generator, Settlement,
    SettlementLayout, SettlementPlacer, SpawnContext, TerrainGenerator,
};
use crate::HearthvaleResult;
use rand::rngs::StdRng;

/// Runs the full generation pipeline.
///
/// # Examples
///
/// ```
/// use hearthvale::WorldGenerator;
///
/// let world = WorldGenerator::new().generate(64, 48, Some(7)).unwrap();
/// assert_eq!(world.seed, 7);
/// assert_eq!(world.tiles.width(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    /// Check each stage's invariants after it runs
    pub validate_stages: bool,
}

impl Default for WorldGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldGenerator {
    pub fn new() -> Self {
        Self {
            validate_stages: true,
        }
    }

    /// Skips the per-stage invariant checks.
    pub fn without_validation() -> Self {
        Self {
            validate_stages: false,
        }
    }

    /// Generates a whole world. A fresh seed is drawn when none is given.
    pub fn generate(&self, width: u32, height: u32, seed: Option<u64>) -> HearthvaleResult<WorldData> {
        let seed = seed.unwrap_or_else(utils::random_seed);
        self.generate_with_config(&GenerationConfig::new(seed, width, height))
    }

    /// Generates a world from an explicit configuration.
    pub fn generate_with_config(&self, config: &GenerationConfig) -> HearthvaleResult<WorldData> {
        config.validate()?;
        log::info!(
            "generating {}x{} world with seed {}",
            config.width,
            config.height,
            config.seed
        );

        let mut rng = utils::create_rng(config);
        let biomes = self.run_stage(&BiomeGenerator, config, &mut rng)?;
        let tiles = self.run_stage(&TerrainGenerator::new(&biomes.grid), config, &mut rng)?;
        let layout = self.run_stage(&SettlementPlacer::new(&tiles, &biomes.grid), config, &mut rng)?;

        let context = SpawnContext::new(&layout.tiles, &biomes.grid, &layout.settlements, &layout.safe_zones);
        let spawned = self.run_stage(&EntitySpawner::new(context), config, &mut rng)?;

        let player_spawn = choose_player_spawn(&layout.tiles, &layout.settlements);
        let walkable = layout.tiles.walkability();

        Ok(WorldData {
            seed: config.seed,
            width: config.width,
            height: config.height,
            origin: config.origin,
            tiles: layout.tiles,
            biomes: biomes.grid,
            walkable,
            settlements: layout.settlements,
            safe_zones: layout.safe_zones,
            npcs: spawned.npcs,
            enemies: spawned.enemies,
            bosses: spawned.bosses,
            objects: spawned.objects,
            chests: spawned.chests,
            player_spawn,
        })
    }

    /// Runs only biome classification.
    pub fn generate_biomes(&self, config: &GenerationConfig) -> HearthvaleResult<BiomeMap> {
        config.validate()?;
        let mut rng = utils::create_rng(config);
        self.run_stage(&BiomeGenerator, config, &mut rng)
    }

    /// Runs classification and terrain.
    pub fn generate_tiles(&self, config: &GenerationConfig) -> HearthvaleResult<(BiomeMap, Grid<TileType>)> {
        config.validate()?;
        let mut rng = utils::create_rng(config);
        let biomes = self.run_stage(&BiomeGenerator, config, &mut rng)?;
        let tiles = self.run_stage(&TerrainGenerator::new(&biomes.grid), config, &mut rng)?;
        Ok((biomes, tiles))
    }

    /// Runs every stage up to and including settlement placement.
    pub fn generate_settlements(
        &self,
        config: &GenerationConfig,
    ) -> HearthvaleResult<(BiomeMap, SettlementLayout)> {
        config.validate()?;
        let mut rng = utils::create_rng(config);
        let biomes = self.run_stage(&BiomeGenerator, config, &mut rng)?;
        let tiles = self.run_stage(&TerrainGenerator::new(&biomes.grid), config, &mut rng)?;
        let layout = self.run_stage(&SettlementPlacer::new(&tiles, &biomes.grid), config, &mut rng)?;
        Ok((biomes, layout))
    }

    /// Generates one fixed-size chunk of a larger world.
    ///
    /// Biomes are sampled at world coordinates so they line up across chunk
    /// borders; everything random is seeded from the chunk's own seed.
    pub fn generate_chunk(&self, world_seed: u64, chunk_x: i32, chunk_y: i32) -> HearthvaleResult<WorldData> {
        self.generate_with_config(&GenerationConfig::for_chunk(world_seed, chunk_x, chunk_y)?)
    }

    fn run_stage<T, G: Generator<T>>(
        &self,
        stage: &G,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> HearthvaleResult<T> {
        log::debug!("running {}", stage.generator_type());
        let output = stage.generate(config, rng)?;
        if self.validate_stages {
            stage.validate(&output, config)?;
        }
        Ok(output)
    }
}

/// Picks the settlement center closest to the middle of the map, or the
/// middle itself when there are no settlements.
pub fn choose_player_spawn(tiles: &Grid<TileType>, settlements: &[Settlement]) -> Position {
    let middle = Position::new(tiles.width() as i32 / 2, tiles.height() as i32 / 2);
    settlements
        .iter()
        .map(|s| s.center)
        .min_by(|a, b| a.euclidean_distance(middle).total_cmp(&b.euclidean_distance(middle)))
        .unwrap_or(middle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Biome;
    use crate::generation::{classify_biome, noise, SettlementKind};
    use crate::utils::Rect;
    use crate::HearthvaleError;

    #[test]
    fn test_generation_is_deterministic() {
        let generator = WorldGenerator::new();
        let a = generator.generate(120, 90, Some(12345)).unwrap();
        let b = generator.generate(120, 90, Some(12345)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        let result = WorldGenerator::new().generate(0, 40, Some(1));
        assert!(matches!(result, Err(HearthvaleError::InvalidConfig(_))));
    }

    #[test]
    fn test_tiny_world_has_no_settlements() {
        let world = WorldGenerator::new().generate(20, 20, Some(3)).unwrap();
        assert!(world.settlements.is_empty());
        assert!(world.npcs.is_empty());
        assert_eq!(world.player_spawn, Position::new(10, 10));
    }

    #[test]
    fn test_partial_entry_points_match_full_run() {
        let generator = WorldGenerator::new();
        let config = GenerationConfig::new(77, 150, 120);
        let world = generator.generate_with_config(&config).unwrap();

        let biomes = generator.generate_biomes(&config).unwrap();
        assert_eq!(biomes.grid, world.biomes);

        let (_, layout) = generator.generate_settlements(&config).unwrap();
        assert_eq!(layout.tiles, world.tiles);
        assert_eq!(layout.settlements, world.settlements);

        let (_, tiles) = generator.generate_tiles(&config).unwrap();
        for (pos, tile) in tiles.iter() {
            if world.settlement_at(pos).is_none() {
                assert_eq!(Some(*tile), world.tile_at(pos));
            }
        }
    }

    #[test]
    fn test_walkability_matches_tiles() {
        let world = WorldGenerator::new().generate(100, 100, Some(5)).unwrap();
        for (pos, tile) in world.tiles.iter() {
            assert_eq!(world.walkable.get(pos), Some(&tile.is_walkable()));
        }
    }

    #[test]
    fn test_chunks_share_the_world_noise() {
        let generator = WorldGenerator::new();
        let chunk = generator.generate_chunk(42, 1, 2).unwrap();
        assert_eq!(chunk.origin, Position::new(64, 128));
        assert_eq!(chunk.width, crate::config::CHUNK_SIZE);
        for (pos, biome) in chunk.biomes.iter() {
            let world_pos = chunk.origin + pos;
            assert_eq!(*biome, classify_biome(noise(42, world_pos.x, world_pos.y)));
        }

        let neighbour = generator.generate_chunk(42, 2, 2).unwrap();
        assert!(matches!(
            generator.generate_chunk(1, i32::MAX, 0),
            Err(HearthvaleError::InvalidConfig(_))
        ));
        assert_ne!(chunk.seed, neighbour.seed);
        assert_eq!(chunk, generator.generate_chunk(42, 1, 2).unwrap());
    }

    #[test]
    fn test_player_spawn_prefers_central_settlement() {
        let settlement = |x: i32, y: i32| Settlement {
            kind: SettlementKind::MiningCamp,
            name: "Camp".to_string(),
            footprint: Rect::centered(Position::new(x, y), 22),
            center: Position::new(x, y),
            biome: Biome::Plains,
            plaza: Rect::centered(Position::new(x, y), 5),
            buildings: Vec::new(),
            safe_zone_radius: 70.0,
        };
        let mut tiles = Grid::new(400, 400, TileType::Grass);
        let settlements = vec![settlement(30, 30), settlement(180, 210), settlement(90, 300)];
        assert_eq!(choose_player_spawn(&tiles, &settlements), Position::new(180, 210));
        assert_eq!(choose_player_spawn(&tiles, &[]), Position::new(200, 200));

        tiles.set(Position::new(200, 200), TileType::Water);
        assert_eq!(choose_player_spawn(&tiles, &[]), Position::new(200, 200));
    }
}
