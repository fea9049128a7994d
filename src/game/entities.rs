//! # Spawned Entities
//!
//! Plain records for everything the spawner places in a world. None of them
//! refer back to the grids; spatial queries go through coordinates.

use crate::game::{Biome, EntityId, Position};
use serde::{Deserialize, Serialize};

/// A settlement resident spawned for an occupied building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: EntityId,
    pub position: Position,
    /// Display name, e.g. "Blacksmith"
    pub name: String,
    /// Occupant type declared by the building, e.g. "blacksmith"
    pub npc_type: String,
    /// Building the NPC lives in
    pub building: String,
    /// Index of the owning settlement in [`crate::WorldData::settlements`]
    pub settlement: usize,
    pub dialog: Vec<String>,
    pub has_shop: bool,
}

/// A hostile creature, either a wilderness enemy or a boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Position,
    pub name: String,
    pub biome: Biome,
    pub health: u32,
    pub damage: u32,
    pub experience: u32,
    pub is_boss: bool,
}

/// Decorative scenery such as trees and rocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldObject {
    pub position: Position,
    /// Object type tag, e.g. "oak_tree"
    pub kind: String,
    pub biome: Biome,
}

/// Loot quality of a chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChestTier {
    Wooden,
    Iron,
    Gold,
}

impl ChestTier {
    /// Picks the tier for a chest at `distance` tiles from the nearest settlement.
    ///
    /// `None` means the world has no settlements at all; such chests are wooden.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearthvale::ChestTier;
    ///
    /// assert_eq!(ChestTier::for_distance(Some(40.0), 150.0, 300.0), ChestTier::Wooden);
    /// assert_eq!(ChestTier::for_distance(Some(200.0), 150.0, 300.0), ChestTier::Iron);
    /// assert_eq!(ChestTier::for_distance(Some(450.0), 150.0, 300.0), ChestTier::Gold);
    /// assert_eq!(ChestTier::for_distance(None, 150.0, 300.0), ChestTier::Wooden);
    /// ```
    pub fn for_distance(distance: Option<f64>, iron_from: f64, gold_from: f64) -> ChestTier {
        match distance {
            None => ChestTier::Wooden,
            Some(d) if d < iron_from => ChestTier::Wooden,
            Some(d) if d < gold_from => ChestTier::Iron,
            Some(_) => ChestTier::Gold,
        }
    }
}

/// A treasure chest placed in the wilderness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chest {
    pub id: EntityId,
    pub position: Position,
    pub tier: ChestTier,
    /// Always false at generation time; the game layer flips it on its own copy.
    pub opened: bool,
}
