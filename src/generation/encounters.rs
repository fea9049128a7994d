//! # Encounter Generation
//!
//! Wilderness enemies drawn from per-biome tables, plus one boss per biome
//! kept well away from every settlement.

use crate::game::{new_entity_id, Biome, Enemy, Position};
use crate::generation::{GenerationConfig, Generator, SpawnContext};
use crate::{HearthvaleError, HearthvaleResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Stat block of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatureTemplate {
    pub name: &'static str,
    pub health: u32,
    pub damage: u32,
    pub experience: u32,
}

impl CreatureTemplate {
    const fn new(name: &'static str, health: u32, damage: u32, experience: u32) -> Self {
        Self {
            name,
            health,
            damage,
            experience,
        }
    }

    fn spawn(&self, position: Position, biome: Biome, is_boss: bool, rng: &mut StdRng) -> Enemy {
        Enemy {
            id: new_entity_id(rng),
            position,
            name: self.name.to_string(),
            biome,
            health: self.health,
            damage: self.damage,
            experience: self.experience,
            is_boss,
        }
    }
}

const PLAINS_ENEMIES: [CreatureTemplate; 3] = [
    CreatureTemplate::new("Wolf", 30, 6, 15),
    CreatureTemplate::new("Bandit", 40, 8, 20),
    CreatureTemplate::new("Wild Boar", 35, 7, 18),
];

const FOREST_ENEMIES: [CreatureTemplate; 3] = [
    CreatureTemplate::new("Goblin", 25, 5, 12),
    CreatureTemplate::new("Giant Spider", 35, 9, 22),
    CreatureTemplate::new("Dire Wolf", 45, 10, 28),
];

const DESERT_ENEMIES: [CreatureTemplate; 3] = [
    CreatureTemplate::new("Scorpion", 30, 8, 18),
    CreatureTemplate::new("Desert Jackal", 25, 6, 12),
    CreatureTemplate::new("Sand Raider", 45, 9, 25),
];

const SNOW_ENEMIES: [CreatureTemplate; 3] = [
    CreatureTemplate::new("Ice Wolf", 40, 9, 24),
    CreatureTemplate::new("Frost Wraith", 50, 12, 35),
    CreatureTemplate::new("Yeti", 70, 14, 45),
];

const SWAMP_ENEMIES: [CreatureTemplate; 3] = [
    CreatureTemplate::new("Swamp Slime", 20, 4, 10),
    CreatureTemplate::new("Bog Lurker", 45, 9, 26),
    CreatureTemplate::new("Marsh Troll", 80, 15, 50),
];

/// Bosses and the biome each one haunts, in spawn order.
pub const BOSSES: [(CreatureTemplate, Biome); 5] = [
    (CreatureTemplate::new("Bandit King", 300, 25, 500), Biome::Plains),
    (CreatureTemplate::new("Ancient Treant", 400, 22, 600), Biome::Forest),
    (CreatureTemplate::new("Sand Wyrm", 380, 30, 650), Biome::Desert),
    (CreatureTemplate::new("Frost Giant", 450, 32, 700), Biome::Snow),
    (CreatureTemplate::new("Bog Hydra", 420, 28, 680), Biome::Swamp),
];

/// Enemy table of a biome.
pub fn enemy_table(biome: Biome) -> &'static [CreatureTemplate] {
    match biome {
        Biome::Plains => &PLAINS_ENEMIES,
        Biome::Forest => &FOREST_ENEMIES,
        Biome::Desert => &DESERT_ENEMIES,
        Biome::Snow => &SNOW_ENEMIES,
        Biome::Swamp => &SWAMP_ENEMIES,
    }
}

/// Wilderness enemies and bosses, in spawn order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encounters {
    pub enemies: Vec<Enemy>,
    pub bosses: Vec<Enemy>,
}

/// Places enemies and bosses.
#[derive(Debug, Clone, Copy)]
pub struct EncounterGenerator<'a> {
    context: SpawnContext<'a>,
}

impl<'a> EncounterGenerator<'a> {
    pub fn new(context: SpawnContext<'a>) -> Self {
        Self { context }
    }

    /// Number of wilderness enemies aimed for.
    pub fn enemy_target(config: &GenerationConfig) -> usize {
        (config.tile_count() as f64 * config.enemy_density).floor() as usize
    }

    /// Minimum distance a boss keeps from `zone_radius`'s center.
    fn boss_clearance(config: &GenerationConfig, zone_radius: f64) -> f64 {
        config.boss_exclusion_radius.max(zone_radius)
    }

    fn spawn_enemies(&self, config: &GenerationConfig, rng: &mut StdRng) -> Vec<Enemy> {
        let target = Self::enemy_target(config);
        let mut enemies = Vec::with_capacity(target);

        for _ in 0..target * 10 {
            if enemies.len() >= target {
                break;
            }
            let Some(pos) = self.context.random_interior(rng) else {
                break;
            };
            if self.context.in_safe_zone(pos) || !self.context.is_walkable(pos) {
                continue;
            }
            let Some(biome) = self.context.biome_at(pos) else {
                continue;
            };
            if let Some(template) = enemy_table(biome).choose(rng) {
                enemies.push(template.spawn(pos, biome, false, rng));
            }
        }

        if enemies.len() < target {
            log::warn!("spawned {} of {} wilderness enemies", enemies.len(), target);
        }
        enemies
    }

    fn spawn_bosses(&self, config: &GenerationConfig, rng: &mut StdRng) -> Vec<Enemy> {
        let mut bosses = Vec::new();

        for (template, biome) in &BOSSES {
            let mut lair = None;
            for _ in 0..config.boss_attempts {
                let Some(pos) = self.context.random_interior(rng) else {
                    break;
                };
                if self.context.biome_at(pos) != Some(*biome) || !self.context.is_walkable(pos) {
                    continue;
                }
                let clear = self.context.safe_zones.iter().all(|zone| {
                    pos.euclidean_distance(zone.center) >= Self::boss_clearance(config, zone.radius)
                });
                if clear {
                    lair = Some(pos);
                    break;
                }
            }

            match lair {
                Some(pos) => bosses.push(template.spawn(pos, *biome, true, rng)),
                None => log::debug!("no lair found for {} in {}", template.name, biome.name()),
            }
        }
        bosses
    }

    /// Checks safe-zone exclusion, footing and boss clearance.
    pub fn check_placement(
        &self,
        enemies: &[Enemy],
        bosses: &[Enemy],
        config: &GenerationConfig,
    ) -> HearthvaleResult<()> {
        for enemy in enemies {
            if self.context.in_safe_zone(enemy.position) {
                return Err(HearthvaleError::GenerationFailed(format!(
                    "{} at {:?} spawned inside a safe zone",
                    enemy.name, enemy.position
                )));
            }
            if !self.context.is_walkable(enemy.position) {
                return Err(HearthvaleError::GenerationFailed(format!(
                    "{} at {:?} stands on an impassable tile",
                    enemy.name, enemy.position
                )));
            }
        }
        for boss in bosses {
            let too_close = self.context.safe_zones.iter().any(|zone| {
                boss.position.euclidean_distance(zone.center) < Self::boss_clearance(config, zone.radius)
            });
            if too_close || self.context.biome_at(boss.position) != Some(boss.biome) {
                return Err(HearthvaleError::GenerationFailed(format!(
                    "boss {} misplaced at {:?}",
                    boss.name, boss.position
                )));
            }
        }
        Ok(())
    }
}

impl Generator<Encounters> for EncounterGenerator<'_> {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> HearthvaleResult<Encounters> {
        let enemies = self.spawn_enemies(config, rng);
        let bosses = self.spawn_bosses(config, rng);
        Ok(Encounters { enemies, bosses })
    }

    fn validate(&self, encounters: &Encounters, config: &GenerationConfig) -> HearthvaleResult<()> {
        self.check_placement(&encounters.enemies, &encounters.bosses, config)
    }

    fn generator_type(&self) -> &'static str {
        "EncounterGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, TileType};
    use crate::generation::{utils, SafeZone};

    #[test]
    fn test_every_biome_has_enemies_and_a_boss() {
        for biome in Biome::ALL {
            assert!(!enemy_table(biome).is_empty());
            assert_eq!(BOSSES.iter().filter(|(_, b)| *b == biome).count(), 1);
        }
    }

    #[test]
    fn test_enemy_target() {
        let config = GenerationConfig::new(1, 500, 500);
        assert_eq!(EncounterGenerator::enemy_target(&config), 200);
        let config = GenerationConfig::new(1, 20, 20);
        assert_eq!(EncounterGenerator::enemy_target(&config), 0);
    }

    #[test]
    fn test_enemies_avoid_safe_zone_and_water() {
        let config = GenerationConfig::new(4, 200, 200);
        let mut tiles = Grid::new(200, 200, TileType::Grass);
        for pos in crate::utils::Rect::new(0, 0, 200, 60).positions() {
            tiles.set(pos, TileType::Water);
        }
        let biomes = Grid::new(200, 200, Biome::Snow);
        let zones = [SafeZone {
            center: Position::new(100, 130),
            radius: 40.0,
        }];
        let generator = EncounterGenerator::new(SpawnContext::new(&tiles, &biomes, &[], &zones));
        let mut rng = utils::create_rng(&config);
        let encounters = generator.generate(&config, &mut rng).unwrap();

        assert!(generator.validate(&encounters, &config).is_ok());
        assert!(!encounters.enemies.is_empty());
        for enemy in &encounters.enemies {
            assert!(enemy.position.y >= 60);
            assert!(enemy.position.euclidean_distance(zones[0].center) >= 40.0);
            assert!(SNOW_ENEMIES.iter().any(|t| t.name == enemy.name));
            assert!(!enemy.is_boss);
        }
    }

    #[test]
    fn test_bosses_keep_their_distance() {
        let config = GenerationConfig::new(21, 300, 300);
        let tiles = Grid::new(300, 300, TileType::Grass);
        let biomes = Grid::from_fn(300, 300, |pos| if pos.x < 150 { Biome::Plains } else { Biome::Desert });
        let zones = [SafeZone {
            center: Position::new(60, 150),
            radius: 70.0,
        }];
        let generator = EncounterGenerator::new(SpawnContext::new(&tiles, &biomes, &[], &zones));
        let mut rng = utils::create_rng(&config);
        let encounters = generator.generate(&config, &mut rng).unwrap();

        let names: Vec<&str> = encounters.bosses.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Bandit King", "Sand Wyrm"]);
        for boss in &encounters.bosses {
            assert!(boss.is_boss);
            assert!(boss.position.euclidean_distance(zones[0].center) >= 80.0);
        }
    }

    #[test]
    fn test_validate_flags_enemy_in_safe_zone() {
        let config = GenerationConfig::new(1, 50, 50);
        let tiles = Grid::new(50, 50, TileType::Grass);
        let biomes = Grid::new(50, 50, Biome::Plains);
        let zones = [SafeZone {
            center: Position::new(25, 25),
            radius: 10.0,
        }];
        let generator = EncounterGenerator::new(SpawnContext::new(&tiles, &biomes, &[], &zones));
        let mut rng = utils::create_rng(&config);
        let intruder = PLAINS_ENEMIES[0].spawn(Position::new(26, 25), Biome::Plains, false, &mut rng);
        let encounters = Encounters {
            enemies: vec![intruder],
            bosses: Vec::new(),
        };
        assert!(generator.validate(&encounters, &config).is_err());
    }
}
