//! Structural invariants of generated worlds.

use hearthvale::{
    classify_biome, noise, GenerationConfig, HearthvaleError, Position, TileType, WorldData,
    WorldGenerator,
};

fn world(seed: u64, width: u32, height: u32) -> WorldData {
    WorldGenerator::new()
        .generate(width, height, Some(seed))
        .expect("generation should succeed")
}

/// A handful of large worlds, generated once per test.
fn sample_worlds() -> Vec<WorldData> {
    [11, 4242, 90210].iter().map(|seed| world(*seed, 256, 256)).collect()
}

#[test]
fn test_border_is_wall() {
    for world in sample_worlds() {
        for (pos, tile) in world.tiles.iter() {
            if world.tiles.is_border(pos) {
                assert_eq!(*tile, TileType::Wall, "border cell {:?} in seed {}", pos, world.seed);
            }
        }
    }
}

#[test]
fn test_walkability_grid_matches_tiles() {
    for world in sample_worlds() {
        for (pos, tile) in world.tiles.iter() {
            assert_eq!(world.is_walkable(pos), tile.is_walkable());
        }
    }
}

#[test]
fn test_settlements_do_not_overlap_and_respect_margin() {
    for world in sample_worlds() {
        for (i, a) in world.settlements.iter().enumerate() {
            assert!(a.footprint.x >= 5 && a.footprint.y >= 5);
            assert!(a.footprint.right() <= world.width as i32 - 5);
            assert!(a.footprint.bottom() <= world.height as i32 - 5);
            assert!(a.kind.allowed_biomes().contains(&a.biome));
            for b in &world.settlements[i + 1..] {
                assert!(!a.footprint.overlaps(&b.footprint), "{} overlaps {}", a.name, b.name);
            }
        }
    }
}

#[test]
fn test_buildings_stay_clear_of_plaza_and_each_other() {
    for world in sample_worlds() {
        for settlement in &world.settlements {
            for (i, building) in settlement.buildings.iter().enumerate() {
                assert!(settlement.footprint.contains_rect(&building.footprint));
                assert!(!building.footprint.overlaps_with_margin(&settlement.plaza, 1));
                for other in &settlement.buildings[i + 1..] {
                    assert!(!building.footprint.overlaps(&other.footprint));
                }
                for door in &building.doors {
                    assert_eq!(world.tile_at(*door), Some(TileType::Door));
                }
                assert_eq!(world.tile_at(building.center()), Some(TileType::BrickFloor));
            }
        }
    }
}

#[test]
fn test_wilderness_entities_avoid_safe_zones() {
    for world in sample_worlds() {
        assert_eq!(world.safe_zones.len(), world.settlements.len());
        for zone in &world.safe_zones {
            for enemy in &world.enemies {
                assert!(!zone.contains(enemy.position));
            }
            for object in &world.objects {
                assert!(!zone.contains(object.position));
            }
            for chest in &world.chests {
                assert!(!zone.contains(chest.position));
            }
        }
        for enemy in &world.enemies {
            assert!(world.is_walkable(enemy.position));
            assert_eq!(world.biome_at(enemy.position), Some(enemy.biome));
        }
        for chest in &world.chests {
            assert_eq!(world.tile_at(chest.position), Some(TileType::Grass));
            assert!(!chest.opened);
        }
    }
}

#[test]
fn test_one_npc_per_occupied_building() {
    for world in sample_worlds() {
        let occupied: usize = world
            .settlements
            .iter()
            .map(|s| s.occupied_buildings().count())
            .sum();
        assert_eq!(world.npcs.len(), occupied);
        for npc in &world.npcs {
            let settlement = &world.settlements[npc.settlement];
            assert!(settlement.footprint.contains(npc.position));
            assert!(!npc.dialog.is_empty());
        }
    }
}

#[test]
fn test_bosses_keep_their_distance() {
    for world in sample_worlds() {
        assert!(world.bosses.len() <= 5);
        for boss in &world.bosses {
            assert!(boss.is_boss);
            assert!(world.is_walkable(boss.position));
            for zone in &world.safe_zones {
                let distance = boss.position.euclidean_distance(zone.center);
                assert!(distance >= 80.0 && distance >= zone.radius);
            }
        }
    }
}

#[test]
fn test_fixed_seed_reproduces_layout() {
    let a = world(12345, 100, 100);
    let b = world(12345, 100, 100);
    assert_eq!(a.settlements.len(), b.settlements.len());
    assert_eq!(
        a.settlements.first().map(|s| s.footprint),
        b.settlements.first().map(|s| s.footprint)
    );
    assert_eq!(a.building_count(), b.building_count());
    assert_eq!(a, b);
}

#[test]
fn test_tiny_world_is_valid_but_empty() {
    let world = world(5, 20, 20);
    assert!(world.settlements.is_empty());
    assert!(world.npcs.is_empty());
    assert!(world.safe_zones.is_empty());
    assert_eq!(world.tiles.len(), 400);
}

#[test]
fn test_degenerate_dimensions_are_rejected() {
    let generator = WorldGenerator::new();
    assert!(matches!(
        generator.generate(0, 0, Some(1)),
        Err(HearthvaleError::InvalidConfig(_))
    ));
    let mut config = GenerationConfig::new(1, 50, 50);
    config.secondary_tile_chance = 1.5;
    assert!(matches!(
        generator.generate_with_config(&config),
        Err(HearthvaleError::InvalidConfig(_))
    ));
}

#[test]
fn test_biome_lookup_matches_grid() {
    let world = world(777, 180, 140);
    for (pos, biome) in world.biomes.iter() {
        assert_eq!(*biome, classify_biome(noise(777, pos.x, pos.y)));
    }
    let sample = Position::new(93, 61);
    assert_eq!(world.biome_at(sample), Some(classify_biome(noise(777, 93, 61))));
}

#[test]
fn test_large_worlds_get_settlements() {
    let total: usize = (0..12u64)
        .map(|seed| {
            WorldGenerator::without_validation()
                .generate_settlements(&GenerationConfig::new(seed * 7919, 256, 256))
                .map(|(_, layout)| layout.settlements.len())
                .unwrap_or(0)
        })
        .sum();
    assert!(total > 0, "no settlements placed across any seed");
}
