//! # Entity Spawner
//!
//! Populates a finished world: NPCs for occupied buildings, wilderness
//! enemies, biome bosses, decorative objects and treasure chests.
//!
//! The sub-stages always run in that order, because they share one random
//! stream and entity ids are drawn from it.

use crate::game::{Biome, Chest, Enemy, Grid, Npc, Position, TileType, WorldObject};
use crate::generation::{
    EncounterGenerator, GenerationConfig, Generator, ItemGenerator, NpcGenerator, SafeZone,
    Settlement,
};
use crate::utils::nearest_distance;
use crate::HearthvaleResult;
use rand::{rngs::StdRng, Rng};

/// Read-only view of the world that every spawning stage consults.
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext<'a> {
    pub tiles: &'a Grid<TileType>,
    pub biomes: &'a Grid<Biome>,
    pub settlements: &'a [Settlement],
    pub safe_zones: &'a [SafeZone],
}

impl<'a> SpawnContext<'a> {
    pub fn new(
        tiles: &'a Grid<TileType>,
        biomes: &'a Grid<Biome>,
        settlements: &'a [Settlement],
        safe_zones: &'a [SafeZone],
    ) -> Self {
        Self {
            tiles,
            biomes,
            settlements,
            safe_zones,
        }
    }

    pub fn in_safe_zone(&self, pos: Position) -> bool {
        self.safe_zones.iter().any(|zone| zone.contains(pos))
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tiles.get(pos).is_some_and(|tile| tile.is_walkable())
    }

    pub fn tile_at(&self, pos: Position) -> Option<TileType> {
        self.tiles.get(pos).copied()
    }

    pub fn biome_at(&self, pos: Position) -> Option<Biome> {
        self.biomes.get(pos).copied()
    }

    /// Distance to the nearest safe-zone center, `None` without settlements.
    pub fn distance_to_nearest_zone(&self, pos: Position) -> Option<f64> {
        nearest_distance(pos, self.safe_zones.iter().map(|zone| zone.center))
    }

    /// Draws a uniform position off the border ring, or `None` if the grid
    /// has no interior.
    pub fn random_interior(&self, rng: &mut StdRng) -> Option<Position> {
        let (w, h) = (self.tiles.width() as i32, self.tiles.height() as i32);
        if w < 3 || h < 3 {
            return None;
        }
        Some(Position::new(rng.gen_range(1..w - 1), rng.gen_range(1..h - 1)))
    }
}

/// Everything the spawner produced, in spawn order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnedEntities {
    pub npcs: Vec<Npc>,
    pub enemies: Vec<Enemy>,
    pub bosses: Vec<Enemy>,
    pub objects: Vec<WorldObject>,
    pub chests: Vec<Chest>,
}

/// Spawning stage of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct EntitySpawner<'a> {
    pub context: SpawnContext<'a>,
}

impl<'a> EntitySpawner<'a> {
    pub fn new(context: SpawnContext<'a>) -> Self {
        Self { context }
    }
}

impl Generator<SpawnedEntities> for EntitySpawner<'_> {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> HearthvaleResult<SpawnedEntities> {
        let npcs = NpcGenerator::new(self.context.settlements).generate(config, rng)?;
        let encounters = EncounterGenerator::new(self.context).generate(config, rng)?;
        let loot = ItemGenerator::new(self.context).generate(config, rng)?;

        let spawned = SpawnedEntities {
            npcs,
            enemies: encounters.enemies,
            bosses: encounters.bosses,
            objects: loot.objects,
            chests: loot.chests,
        };
        log::info!(
            "spawned {} npcs, {} enemies, {} bosses, {} objects, {} chests",
            spawned.npcs.len(),
            spawned.enemies.len(),
            spawned.bosses.len(),
            spawned.objects.len(),
            spawned.chests.len()
        );
        Ok(spawned)
    }

    fn validate(&self, spawned: &SpawnedEntities, config: &GenerationConfig) -> HearthvaleResult<()> {
        NpcGenerator::new(self.context.settlements).validate(&spawned.npcs, config)?;
        EncounterGenerator::new(self.context).check_placement(&spawned.enemies, &spawned.bosses, config)?;
        ItemGenerator::new(self.context).check_placement(&spawned.objects, &spawned.chests)
    }

    fn generator_type(&self) -> &'static str {
        "EntitySpawner"
    }
}
