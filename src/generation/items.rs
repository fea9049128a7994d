//! # Item Generation
//!
//! Decorative scenery scattered over open grass and treasure chests whose
//! tier grows with distance from civilization.

use crate::game::{new_entity_id, Biome, Chest, ChestTier, TileType, WorldObject};
use crate::generation::{GenerationConfig, Generator, SpawnContext};
use crate::{HearthvaleError, HearthvaleResult};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng};
use std::collections::HashSet;

/// Chest placement attempts per chest aimed for.
const CHEST_ATTEMPTS_PER_TARGET: u32 = 3;

/// Chance of a free grass tile receiving a decoration.
pub fn object_density(biome: Biome) -> f64 {
    match biome {
        Biome::Forest => 0.08,
        Biome::Swamp => 0.04,
        Biome::Desert | Biome::Snow => 0.03,
        Biome::Plains => 0.01,
    }
}

/// Decoration kinds that grow in a biome.
pub fn object_kinds(biome: Biome) -> &'static [&'static str] {
    match biome {
        Biome::Plains => &["oak_tree", "rock", "flower_patch"],
        Biome::Forest => &["oak_tree", "pine_tree", "bush", "mushroom_ring"],
        Biome::Desert => &["cactus", "dead_tree", "sandstone_rock"],
        Biome::Snow => &["snowy_pine", "ice_rock"],
        Biome::Swamp => &["willow_tree", "reeds", "rotting_log"],
    }
}

/// Decorations and chests, in spawn order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loot {
    pub objects: Vec<WorldObject>,
    pub chests: Vec<Chest>,
}

/// Places decorations and chests.
#[derive(Debug, Clone, Copy)]
pub struct ItemGenerator<'a> {
    context: SpawnContext<'a>,
}

impl<'a> ItemGenerator<'a> {
    pub fn new(context: SpawnContext<'a>) -> Self {
        Self { context }
    }

    /// Visits every grass tile in row-major order.
    fn scatter_objects(&self, rng: &mut StdRng) -> Vec<WorldObject> {
        let mut objects = Vec::new();
        for (pos, tile) in self.context.tiles.iter() {
            if *tile != TileType::Grass || self.context.in_safe_zone(pos) {
                continue;
            }
            let Some(biome) = self.context.biome_at(pos) else {
                continue;
            };
            if !rng.gen_bool(object_density(biome)) {
                continue;
            }
            if let Some(kind) = object_kinds(biome).choose(rng) {
                objects.push(WorldObject {
                    position: pos,
                    kind: kind.to_string(),
                    biome,
                });
            }
        }
        objects
    }

    fn hide_chests(&self, config: &GenerationConfig, rng: &mut StdRng) -> Vec<Chest> {
        let target = config.chest_target as usize;
        let mut chests = Vec::new();
        let mut taken = HashSet::new();

        for _ in 0..config.chest_target.saturating_mul(CHEST_ATTEMPTS_PER_TARGET) {
            if chests.len() >= target {
                break;
            }
            let Some(pos) = self.context.random_interior(rng) else {
                break;
            };
            if self.context.tile_at(pos) != Some(TileType::Grass)
                || self.context.in_safe_zone(pos)
                || taken.contains(&pos)
            {
                continue;
            }
            let tier = ChestTier::for_distance(
                self.context.distance_to_nearest_zone(pos),
                config.iron_chest_distance,
                config.gold_chest_distance,
            );
            taken.insert(pos);
            chests.push(Chest {
                id: new_entity_id(rng),
                position: pos,
                tier,
                opened: false,
            });
        }

        if chests.len() < target {
            log::warn!("hid {} of {} chests", chests.len(), target);
        }
        chests
    }

    /// Checks that objects and chests sit on grass outside safe zones, one chest per tile.
    pub fn check_placement(&self, objects: &[WorldObject], chests: &[Chest]) -> HearthvaleResult<()> {
        let positions = objects
            .iter()
            .map(|o| o.position)
            .chain(chests.iter().map(|c| c.position));
        for pos in positions {
            if self.context.in_safe_zone(pos) {
                return Err(HearthvaleError::GenerationFailed(format!(
                    "item at {:?} lies inside a safe zone",
                    pos
                )));
            }
            if self.context.tile_at(pos) != Some(TileType::Grass) {
                return Err(HearthvaleError::GenerationFailed(format!(
                    "item at {:?} is not on grass",
                    pos
                )));
            }
        }
        let unique: HashSet<_> = chests.iter().map(|c| c.position).collect();
        if unique.len() != chests.len() {
            return Err(HearthvaleError::GenerationFailed(
                "two chests share a tile".to_string(),
            ));
        }
        Ok(())
    }
}

impl Generator<Loot> for ItemGenerator<'_> {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> HearthvaleResult<Loot> {
        let objects = self.scatter_objects(rng);
        let chests = self.hide_chests(config, rng);
        Ok(Loot { objects, chests })
    }

    fn validate(&self, loot: &Loot, _config: &GenerationConfig) -> HearthvaleResult<()> {
        self.check_placement(&loot.objects, &loot.chests)
    }

    fn generator_type(&self) -> &'static str {
        "ItemGenerator"
    }
}
