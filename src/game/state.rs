//! # World Data
//!
//! The aggregate record a generation run hands to the game layer, plus JSON
//! persistence and summary statistics.
//!
//! Nothing here holds generation state. A `WorldData` is a plain value: the
//! game owns it once [`crate::WorldGenerator`] returns.

use crate::game::{Biome, Chest, Enemy, Grid, Npc, Position, TileType, WorldObject};
use crate::generation::{SafeZone, Settlement, SettlementKind};
use crate::utils::reachable_within;
use crate::{HearthvaleError, HearthvaleResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A fully generated world or chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldData {
    /// Seed the world was generated from
    pub seed: u64,
    pub width: u32,
    pub height: u32,
    /// World coordinate of the top-left cell; (0, 0) except for chunks
    pub origin: Position,
    pub tiles: Grid<TileType>,
    pub biomes: Grid<Biome>,
    pub walkable: Grid<bool>,
    pub settlements: Vec<Settlement>,
    pub safe_zones: Vec<SafeZone>,
    pub npcs: Vec<Npc>,
    pub enemies: Vec<Enemy>,
    pub bosses: Vec<Enemy>,
    pub objects: Vec<WorldObject>,
    pub chests: Vec<Chest>,
    /// Where the player starts, in local coordinates
    pub player_spawn: Position,
}

/// Reachability summary of one settlement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementReach {
    pub name: String,
    pub kind: SettlementKind,
    pub buildings: usize,
    /// Buildings with a door reachable on foot from the plaza center
    pub reachable_buildings: usize,
}

/// Summary counts of a generated world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldStatistics {
    pub seed: u64,
    pub width: u32,
    pub height: u32,
    pub biome_counts: BTreeMap<Biome, usize>,
    pub tile_counts: BTreeMap<TileType, usize>,
    pub settlement_counts: BTreeMap<SettlementKind, usize>,
    pub settlements: usize,
    pub buildings: usize,
    pub npcs: usize,
    pub enemies: usize,
    pub bosses: usize,
    pub objects: usize,
    pub chests: usize,
    /// Fraction of cells that are walkable
    pub walkable_ratio: f64,
    pub reach: Vec<SettlementReach>,
}

impl WorldData {
    pub fn tile_at(&self, pos: Position) -> Option<TileType> {
        self.tiles.get(pos).copied()
    }

    pub fn biome_at(&self, pos: Position) -> Option<Biome> {
        self.biomes.get(pos).copied()
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.walkable.get(pos).copied().unwrap_or(false)
    }

    /// Settlement whose footprint contains `pos`.
    pub fn settlement_at(&self, pos: Position) -> Option<&Settlement> {
        self.settlements.iter().find(|s| s.footprint.contains(pos))
    }

    pub fn building_count(&self) -> usize {
        self.settlements.iter().map(|s| s.buildings.len()).sum()
    }

    /// Saves the world to pretty-printed JSON.
    pub fn save_to_json(&self) -> HearthvaleResult<String> {
        serde_json::to_string_pretty(self).map_err(HearthvaleError::from)
    }

    /// Loads a world from JSON.
    pub fn load_from_json(json: &str) -> HearthvaleResult<Self> {
        serde_json::from_str(json).map_err(HearthvaleError::from)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> HearthvaleResult<()> {
        let json = self.save_to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> HearthvaleResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::load_from_json(&json)
    }

    /// Computes summary statistics.
    pub fn statistics(&self) -> WorldStatistics {
        let mut biome_counts = BTreeMap::new();
        for biome in self.biomes.values() {
            *biome_counts.entry(*biome).or_insert(0) += 1;
        }
        let mut tile_counts = BTreeMap::new();
        for tile in self.tiles.values() {
            *tile_counts.entry(*tile).or_insert(0) += 1;
        }
        let mut settlement_counts = BTreeMap::new();
        for settlement in &self.settlements {
            *settlement_counts.entry(settlement.kind).or_insert(0) += 1;
        }

        let walkable = self.walkable.values().filter(|w| **w).count();
        let walkable_ratio = if self.walkable.is_empty() {
            0.0
        } else {
            walkable as f64 / self.walkable.len() as f64
        };

        WorldStatistics {
            seed: self.seed,
            width: self.width,
            height: self.height,
            biome_counts,
            tile_counts,
            settlement_counts,
            settlements: self.settlements.len(),
            buildings: self.building_count(),
            npcs: self.npcs.len(),
            enemies: self.enemies.len(),
            bosses: self.bosses.len(),
            objects: self.objects.len(),
            chests: self.chests.len(),
            walkable_ratio,
            reach: self.settlements.iter().map(|s| self.reach_of(s)).collect(),
        }
    }

    fn reach_of(&self, settlement: &Settlement) -> SettlementReach {
        let reached = reachable_within(&self.tiles, settlement.plaza.center(), settlement.footprint);
        let reachable_buildings = settlement
            .buildings
            .iter()
            .filter(|b| b.doors.iter().any(|door| reached.contains(door)))
            .count();
        SettlementReach {
            name: settlement.name.clone(),
            kind: settlement.kind,
            buildings: settlement.buildings.len(),
            reachable_buildings,
        }
    }
}
