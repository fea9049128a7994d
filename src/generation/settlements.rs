//! # Settlement Placement
//!
//! Places villages, outposts and camps on the terrain. Each archetype is
//! searched for in two phases: a strict phase that rejects any water inside
//! the footprint, then a relaxed phase that tolerates a little.
//!
//! All mutable state of a placement run lives in a [`PlacementSession`] that is
//! created for one [`SettlementPlacer::generate`] call and consumed at its end.

use crate::game::{Biome, Grid, Position, TileType};
use crate::generation::buildings::{self, Building, BuildingTemplate};
use crate::generation::{GenerationConfig, Generator};
use crate::utils::Rect;
use crate::{HearthvaleError, HearthvaleResult};
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

const VILLAGE_ROSTER: [BuildingTemplate; 9] = [
    BuildingTemplate::new("Inn", 10, 8, Some("innkeeper"), true),
    BuildingTemplate::new("General Store", 8, 7, Some("merchant"), true),
    BuildingTemplate::new("Blacksmith", 8, 7, Some("blacksmith"), true),
    BuildingTemplate::new("Elder's House", 8, 8, Some("elder"), false),
    BuildingTemplate::new("Chapel", 9, 8, Some("priest"), false),
    BuildingTemplate::new("Cottage", 6, 6, Some("villager"), false),
    BuildingTemplate::new("Cottage", 6, 6, Some("villager"), false),
    BuildingTemplate::new("Farmhouse", 7, 6, Some("farmer"), false),
    BuildingTemplate::new("Storehouse", 6, 5, None, false),
];

const DESERT_OUTPOST_ROSTER: [BuildingTemplate; 6] = [
    BuildingTemplate::new("Caravanserai", 9, 7, Some("innkeeper"), true),
    BuildingTemplate::new("Water Merchant", 7, 6, Some("merchant"), true),
    BuildingTemplate::new("Nomad Tent", 6, 5, Some("nomad"), false),
    BuildingTemplate::new("Nomad Tent", 6, 5, Some("nomad"), false),
    BuildingTemplate::new("Guard Post", 5, 5, Some("guard"), false),
    BuildingTemplate::new("Storage Hut", 5, 5, None, false),
];

const SNOW_SETTLEMENT_ROSTER: [BuildingTemplate; 6] = [
    BuildingTemplate::new("Longhouse", 10, 7, Some("elder"), false),
    BuildingTemplate::new("Fur Trader", 7, 6, Some("trader"), true),
    BuildingTemplate::new("Hunter's Lodge", 7, 6, Some("hunter"), false),
    BuildingTemplate::new("Smithy", 6, 6, Some("blacksmith"), true),
    BuildingTemplate::new("Cabin", 6, 5, Some("villager"), false),
    BuildingTemplate::new("Cabin", 6, 5, Some("villager"), false),
];

const TRADING_POST_ROSTER: [BuildingTemplate; 5] = [
    BuildingTemplate::new("Trading Hall", 9, 7, Some("merchant"), true),
    BuildingTemplate::new("Warehouse", 8, 6, None, false),
    BuildingTemplate::new("Tavern", 8, 6, Some("innkeeper"), true),
    BuildingTemplate::new("Stable", 6, 5, Some("stablehand"), false),
    BuildingTemplate::new("Guard House", 5, 5, Some("guard"), false),
];

const MINING_CAMP_ROSTER: [BuildingTemplate; 4] = [
    BuildingTemplate::new("Foreman's Hut", 6, 5, Some("foreman"), false),
    BuildingTemplate::new("Ore Exchange", 6, 5, Some("merchant"), true),
    BuildingTemplate::new("Bunkhouse", 7, 5, Some("miner"), false),
    BuildingTemplate::new("Tool Shed", 4, 4, None, false),
];

const FISHING_VILLAGE_ROSTER: [BuildingTemplate; 5] = [
    BuildingTemplate::new("Fishmonger", 7, 6, Some("fishmonger"), true),
    BuildingTemplate::new("Boathouse", 8, 6, Some("fisherman"), false),
    BuildingTemplate::new("Net Maker", 6, 5, Some("craftsman"), true),
    BuildingTemplate::new("Cottage", 5, 5, Some("villager"), false),
    BuildingTemplate::new("Cottage", 5, 5, Some("villager"), false),
];

/// Settlement archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SettlementKind {
    Village,
    DesertOutpost,
    SnowSettlement,
    TradingPost,
    MiningCamp,
    FishingVillage,
}

impl SettlementKind {
    /// Every archetype, in placement order.
    pub const ALL: [SettlementKind; 6] = [
        SettlementKind::Village,
        SettlementKind::DesertOutpost,
        SettlementKind::SnowSettlement,
        SettlementKind::TradingPost,
        SettlementKind::MiningCamp,
        SettlementKind::FishingVillage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SettlementKind::Village => "Village",
            SettlementKind::DesertOutpost => "Desert Outpost",
            SettlementKind::SnowSettlement => "Snow Settlement",
            SettlementKind::TradingPost => "Trading Post",
            SettlementKind::MiningCamp => "Mining Camp",
            SettlementKind::FishingVillage => "Fishing Village",
        }
    }

    /// Footprint `(width, height)` in tiles.
    pub fn footprint(self) -> (u32, u32) {
        match self {
            SettlementKind::Village => (40, 40),
            SettlementKind::DesertOutpost => (30, 30),
            SettlementKind::SnowSettlement => (32, 32),
            SettlementKind::TradingPost => (28, 28),
            SettlementKind::MiningCamp => (22, 22),
            SettlementKind::FishingVillage => (26, 26),
        }
    }

    /// How many instances placement aims for.
    pub fn target_count(self) -> u32 {
        match self {
            SettlementKind::Village => 3,
            _ => 2,
        }
    }

    /// Biomes the footprint center may lie in.
    pub fn allowed_biomes(self) -> &'static [Biome] {
        match self {
            SettlementKind::Village => &[Biome::Plains, Biome::Forest],
            SettlementKind::DesertOutpost => &[Biome::Desert],
            SettlementKind::SnowSettlement => &[Biome::Snow],
            SettlementKind::TradingPost => &[Biome::Plains, Biome::Desert, Biome::Forest],
            SettlementKind::MiningCamp => &[Biome::Plains, Biome::Snow, Biome::Desert],
            SettlementKind::FishingVillage => &[Biome::Plains, Biome::Forest, Biome::Swamp],
        }
    }

    pub fn safe_zone_radius(self) -> f64 {
        match self {
            SettlementKind::Village => 100.0,
            SettlementKind::DesertOutpost | SettlementKind::SnowSettlement => 85.0,
            SettlementKind::TradingPost => 80.0,
            SettlementKind::MiningCamp => 70.0,
            SettlementKind::FishingVillage => 75.0,
        }
    }

    pub fn roster(self) -> &'static [BuildingTemplate] {
        match self {
            SettlementKind::Village => &VILLAGE_ROSTER,
            SettlementKind::DesertOutpost => &DESERT_OUTPOST_ROSTER,
            SettlementKind::SnowSettlement => &SNOW_SETTLEMENT_ROSTER,
            SettlementKind::TradingPost => &TRADING_POST_ROSTER,
            SettlementKind::MiningCamp => &MINING_CAMP_ROSTER,
            SettlementKind::FishingVillage => &FISHING_VILLAGE_ROSTER,
        }
    }

    /// Ground laid over the footprint, given the biome at its center.
    pub fn ground_tile(self, center_biome: Biome) -> TileType {
        match self {
            SettlementKind::DesertOutpost => TileType::Sand,
            SettlementKind::SnowSettlement => TileType::Snow,
            _ if center_biome == Biome::Forest => TileType::ForestFloor,
            _ => TileType::Dirt,
        }
    }

    pub fn has_well(self) -> bool {
        matches!(self, SettlementKind::Village | SettlementKind::FishingVillage)
    }

    fn place_names(self) -> &'static [&'static str] {
        match self {
            SettlementKind::Village => &["Oakshire", "Millbrook", "Ashford", "Thornfield"],
            SettlementKind::DesertOutpost => &["Dunewatch", "Sunspire", "Mirage Rest"],
            SettlementKind::SnowSettlement => &["Frosthold", "Whitevale", "Icemere"],
            SettlementKind::TradingPost => &["Crossroads", "Tradewind", "Coinbridge"],
            SettlementKind::MiningCamp => &["Ironvein", "Deepdelve", "Copperhill"],
            SettlementKind::FishingVillage => &["Saltmarsh", "Reedhaven", "Gullport"],
        }
    }

    /// Display name of the `index`-th settlement of this kind.
    pub fn settlement_name(self, index: usize) -> String {
        let names = self.place_names();
        let base = names[index % names.len()];
        match index / names.len() {
            0 => base.to_string(),
            round => format!("{} {}", base, round + 1),
        }
    }
}

/// Circular exclusion area around a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    pub center: Position,
    pub radius: f64,
}

impl SafeZone {
    /// Whether `pos` lies strictly within the zone.
    pub fn contains(&self, pos: Position) -> bool {
        pos.euclidean_distance(self.center) < self.radius
    }
}

/// A placed settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub kind: SettlementKind,
    pub name: String,
    pub footprint: Rect,
    pub center: Position,
    /// Biome under the center cell
    pub biome: Biome,
    pub plaza: Rect,
    pub buildings: Vec<Building>,
    pub safe_zone_radius: f64,
}

impl Settlement {
    pub fn safe_zone(&self) -> SafeZone {
        SafeZone {
            center: self.center,
            radius: self.safe_zone_radius,
        }
    }

    /// Buildings that house an NPC.
    pub fn occupied_buildings(&self) -> impl Iterator<Item = &Building> + '_ {
        self.buildings.iter().filter(|b| b.is_occupied())
    }
}

/// Output of the settlement stage.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementLayout {
    /// Terrain with settlements stamped in
    pub tiles: Grid<TileType>,
    pub settlements: Vec<Settlement>,
    /// One per settlement, same order
    pub safe_zones: Vec<SafeZone>,
}

/// Mutable state of one settlement placement run.
#[derive(Debug)]
pub struct PlacementSession {
    tiles: Grid<TileType>,
    occupied: Vec<Rect>,
    settlements: Vec<Settlement>,
    safe_zones: Vec<SafeZone>,
}

impl PlacementSession {
    pub fn new(tiles: Grid<TileType>) -> Self {
        Self {
            tiles,
            occupied: Vec::new(),
            settlements: Vec::new(),
            safe_zones: Vec::new(),
        }
    }

    pub fn is_free(&self, footprint: &Rect) -> bool {
        !self.occupied.iter().any(|rect| footprint.overlaps(rect))
    }

    pub fn water_tiles(&self, footprint: &Rect) -> usize {
        footprint
            .positions()
            .filter(|pos| self.tiles.get(*pos) == Some(&TileType::Water))
            .count()
    }

    pub fn count_of(&self, kind: SettlementKind) -> usize {
        self.settlements.iter().filter(|s| s.kind == kind).count()
    }

    fn register(&mut self, settlement: Settlement) {
        self.occupied.push(settlement.footprint);
        self.safe_zones.push(settlement.safe_zone());
        self.settlements.push(settlement);
    }

    pub fn into_layout(self) -> SettlementLayout {
        SettlementLayout {
            tiles: self.tiles,
            settlements: self.settlements,
            safe_zones: self.safe_zones,
        }
    }
}

/// Settlement stage of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct SettlementPlacer<'a> {
    pub tiles: &'a Grid<TileType>,
    pub biomes: &'a Grid<Biome>,
}

impl<'a> SettlementPlacer<'a> {
    pub fn new(tiles: &'a Grid<TileType>, biomes: &'a Grid<Biome>) -> Self {
        Self { tiles, biomes }
    }

    /// Whether a `width` x `height` footprint fits between the edge margins.
    fn fits(&self, width: u32, height: u32, margin: u32) -> bool {
        let margins = 2 * margin as u64;
        width as u64 + margins <= self.tiles.width() as u64 && height as u64 + margins <= self.tiles.height() as u64
    }

    /// Runs the strict phase and then the relaxed phase.
    fn find_site(
        &self,
        session: &PlacementSession,
        kind: SettlementKind,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> Option<(Rect, Biome)> {
        for tolerance in [0, config.relaxed_water_tolerance as usize] {
            if let Some(site) = self.search(session, kind, tolerance, config, rng) {
                return Some(site);
            }
        }
        None
    }

    fn search(
        &self,
        session: &PlacementSession,
        kind: SettlementKind,
        water_tolerance: usize,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> Option<(Rect, Biome)> {
        let (width, height) = kind.footprint();
        let margin = config.settlement_edge_margin as i32;
        let max_x = self.tiles.width() as i32 - margin - width as i32;
        let max_y = self.tiles.height() as i32 - margin - height as i32;

        for _ in 0..config.placement_attempts {
            let footprint = Rect::new(
                rng.gen_range(margin..=max_x),
                rng.gen_range(margin..=max_y),
                width,
                height,
            );
            let Some(&biome) = self.biomes.get(footprint.center()) else {
                continue;
            };
            if !kind.allowed_biomes().contains(&biome) {
                continue;
            }
            if !session.is_free(&footprint) {
                continue;
            }
            if session.water_tiles(&footprint) > water_tolerance {
                continue;
            }
            return Some((footprint, biome));
        }
        None
    }

    /// Lays ground, plaza, landmark, buildings and paths for an accepted site.
    fn build(
        &self,
        session: &mut PlacementSession,
        kind: SettlementKind,
        footprint: Rect,
        biome: Biome,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> HearthvaleResult<Settlement> {
        let tiles = &mut session.tiles;
        let ground = kind.ground_tile(biome);
        for pos in footprint.positions() {
            if let Some(tile) = tiles.get_mut(pos) {
                if *tile != TileType::Water {
                    *tile = ground;
                }
            }
        }

        let center = footprint.center();
        let plaza_side = (footprint.width.min(footprint.height) / 4).max(3);
        let plaza = Rect::centered(center, plaza_side);
        for pos in plaza.positions() {
            tiles.set(pos, TileType::Stone);
        }

        if kind.has_well() {
            tiles.set(Position::new(center.x, center.y - 1), TileType::Well);
        }
        if kind == SettlementKind::TradingPost {
            for pos in Rect::centered(center, 3).positions() {
                tiles.set(pos, TileType::Stone);
            }
        }

        let placed = buildings::place_buildings(
            tiles,
            footprint,
            plaza,
            kind.roster(),
            config.building_attempts,
            rng,
        )?;

        let material = buildings::path_material(ground);
        for building in &placed {
            buildings::lay_path(tiles, plaza, center, building.center(), material);
        }

        Ok(Settlement {
            kind,
            name: kind.settlement_name(session.count_of(kind)),
            footprint,
            center,
            biome,
            plaza,
            buildings: placed,
            safe_zone_radius: kind.safe_zone_radius(),
        })
    }
}

impl Generator<SettlementLayout> for SettlementPlacer<'_> {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> HearthvaleResult<SettlementLayout> {
        let mut session = PlacementSession::new(self.tiles.clone());

        for kind in SettlementKind::ALL {
            let (width, height) = kind.footprint();
            if !self.fits(width, height, config.settlement_edge_margin) {
                log::debug!(
                    "skipping {}: {}x{} footprint does not fit a {}x{} world",
                    kind.name(),
                    width,
                    height,
                    self.tiles.width(),
                    self.tiles.height()
                );
                continue;
            }

            for instance in 0..kind.target_count() {
                let Some((footprint, biome)) = self.find_site(&session, kind, config, rng) else {
                    log::warn!(
                        "placed {} of {} {} settlements",
                        instance,
                        kind.target_count(),
                        kind.name()
                    );
                    break;
                };
                let settlement = self.build(&mut session, kind, footprint, biome, config, rng)?;
                log::debug!(
                    "placed {} ({}) at {:?} with {} buildings",
                    settlement.name,
                    kind.name(),
                    settlement.footprint,
                    settlement.buildings.len()
                );
                session.register(settlement);
            }
        }

        let layout = session.into_layout();
        log::info!(
            "placed {} settlements with {} buildings",
            layout.settlements.len(),
            layout.settlements.iter().map(|s| s.buildings.len()).sum::<usize>()
        );
        Ok(layout)
    }

    fn validate(&self, layout: &SettlementLayout, config: &GenerationConfig) -> HearthvaleResult<()> {
        let margin = config.settlement_edge_margin as i32;
        let world = Rect::new(
            margin,
            margin,
            layout.tiles.width().saturating_sub(2 * config.settlement_edge_margin),
            layout.tiles.height().saturating_sub(2 * config.settlement_edge_margin),
        );
        let fail = |msg: String| -> HearthvaleResult<()> { Err(HearthvaleError::GenerationFailed(msg)) };

        if layout.safe_zones.len() != layout.settlements.len() {
            return fail("safe zone count differs from settlement count".to_string());
        }
        for (i, settlement) in layout.settlements.iter().enumerate() {
            if !world.contains_rect(&settlement.footprint) {
                return fail(format!("{} leaves the world margins", settlement.name));
            }
            if let Some(other) = layout.settlements[i + 1..]
                .iter()
                .find(|other| other.footprint.overlaps(&settlement.footprint))
            {
                return fail(format!("{} overlaps {}", settlement.name, other.name));
            }
            for (j, building) in settlement.buildings.iter().enumerate() {
                if !settlement.footprint.contains_rect(&building.footprint) {
                    return fail(format!("{} sticks out of {}", building.name, settlement.name));
                }
                if building.footprint.overlaps_with_margin(&settlement.plaza, 1) {
                    return fail(format!("{} crowds the plaza of {}", building.name, settlement.name));
                }
                if settlement.buildings[j + 1..]
                    .iter()
                    .any(|other| other.footprint.overlaps(&building.footprint))
                {
                    return fail(format!("{} overlaps another building", building.name));
                }
            }
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "SettlementPlacer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils;

    fn flat_world(width: u32, height: u32, biome: Biome) -> (Grid<TileType>, Grid<Biome>) {
        let (w, h) = (width as i32, height as i32);
        let tiles = Grid::from_fn(width, height, |pos| {
            if pos.x == 0 || pos.y == 0 || pos.x == w - 1 || pos.y == h - 1 {
                TileType::Wall
            } else {
                TileType::Grass
            }
        });
        (tiles, Grid::new(width, height, biome))
    }

    fn place(tiles: &Grid<TileType>, biomes: &Grid<Biome>, seed: u64) -> SettlementLayout {
        let config = GenerationConfig::new(seed, tiles.width(), tiles.height());
        let placer = SettlementPlacer::new(tiles, biomes);
        let mut rng = utils::create_rng(&config);
        let layout = placer.generate(&config, &mut rng).unwrap();
        placer.validate(&layout, &config).unwrap();
        layout
    }

    #[test]
    fn test_archetype_table() {
        assert_eq!(SettlementKind::Village.footprint(), (40, 40));
        assert_eq!(SettlementKind::Village.target_count(), 3);
        assert_eq!(SettlementKind::MiningCamp.safe_zone_radius(), 70.0);
        assert_eq!(SettlementKind::Village.roster().len(), 9);
        assert_eq!(SettlementKind::MiningCamp.roster().len(), 4);
        for kind in SettlementKind::ALL {
            let (w, h) = kind.footprint();
            for template in kind.roster() {
                assert!(template.width < w && template.height < h);
            }
        }
    }

    #[test]
    fn test_ground_tile_by_kind_and_biome() {
        assert_eq!(SettlementKind::DesertOutpost.ground_tile(Biome::Plains), TileType::Sand);
        assert_eq!(SettlementKind::SnowSettlement.ground_tile(Biome::Forest), TileType::Snow);
        assert_eq!(SettlementKind::Village.ground_tile(Biome::Forest), TileType::ForestFloor);
        assert_eq!(SettlementKind::TradingPost.ground_tile(Biome::Desert), TileType::Dirt);
    }

    #[test]
    fn test_settlement_names() {
        assert_eq!(SettlementKind::Village.settlement_name(0), "Oakshire");
        assert_eq!(SettlementKind::MiningCamp.settlement_name(3), "Ironvein 2");
    }

    #[test]
    fn test_safe_zone_is_strict() {
        let zone = SafeZone {
            center: Position::new(0, 0),
            radius: 5.0,
        };
        assert!(zone.contains(Position::new(3, 3)));
        assert!(!zone.contains(Position::new(3, 4)));
    }

    #[test]
    fn test_small_world_places_nothing() {
        let (tiles, biomes) = flat_world(20, 20, Biome::Plains);
        let layout = place(&tiles, &biomes, 1);
        assert!(layout.settlements.is_empty());
        assert!(layout.safe_zones.is_empty());
        assert_eq!(layout.tiles, tiles);
    }

    #[test]
    fn test_plains_world_gets_villages() {
        let (tiles, biomes) = flat_world(300, 300, Biome::Plains);
        let layout = place(&tiles, &biomes, 7);

        let villages: Vec<_> = layout
            .settlements
            .iter()
            .filter(|s| s.kind == SettlementKind::Village)
            .collect();
        assert_eq!(villages.len(), 3);
        assert!(layout
            .settlements
            .iter()
            .all(|s| s.kind != SettlementKind::DesertOutpost && s.kind != SettlementKind::SnowSettlement));

        for (settlement, zone) in layout.settlements.iter().zip(&layout.safe_zones) {
            assert_eq!(*zone, settlement.safe_zone());
            assert_eq!(layout.tiles.get(settlement.center), Some(&TileType::Stone));
            if settlement.kind.has_well() {
                let well = Position::new(settlement.center.x, settlement.center.y - 1);
                assert_eq!(layout.tiles.get(well), Some(&TileType::Well));
            }
        }
    }

    #[test]
    fn test_desert_world_gets_outposts() {
        let (tiles, biomes) = flat_world(200, 200, Biome::Desert);
        let layout = place(&tiles, &biomes, 11);
        let outposts: Vec<_> = layout
            .settlements
            .iter()
            .filter(|s| s.kind == SettlementKind::DesertOutpost)
            .collect();
        assert_eq!(outposts.len(), 2);
        for outpost in outposts {
            let cells: Vec<TileType> = outpost
                .footprint
                .positions()
                .filter_map(|pos| layout.tiles.get(pos).copied())
                .collect();
            assert!(cells.contains(&TileType::Sand));
            assert!(!cells.contains(&TileType::Grass));
        }
    }

    #[test]
    fn test_settlements_never_overlap() {
        let (tiles, biomes) = flat_world(160, 160, Biome::Plains);
        for seed in 0..5 {
            let layout = place(&tiles, &biomes, seed);
            for (i, a) in layout.settlements.iter().enumerate() {
                for b in &layout.settlements[i + 1..] {
                    assert!(!a.footprint.overlaps(&b.footprint));
                }
            }
        }
    }

    #[test]
    fn test_strict_phase_rejects_water() {
        let (mut tiles, biomes) = flat_world(60, 60, Biome::Plains);
        for pos in Rect::new(5, 5, 50, 50).positions() {
            if (pos.x + pos.y) % 7 == 0 {
                tiles.set(pos, TileType::Water);
            }
        }
        let layout = place(&tiles, &biomes, 3);
        assert!(layout.settlements.is_empty());
    }

    #[test]
    fn test_relaxed_phase_tolerates_some_water() {
        let (mut tiles, biomes) = flat_world(60, 60, Biome::Plains);
        for x in [20, 30, 40] {
            tiles.set(Position::new(x, x), TileType::Water);
        }
        let layout = place(&tiles, &biomes, 3);
        assert!(!layout.settlements.is_empty());
        let water_left = layout.tiles.values().filter(|t| **t == TileType::Water).count();
        assert!(water_left <= 3);
    }

    #[test]
    fn test_validate_catches_overlap() {
        let (tiles, biomes) = flat_world(300, 300, Biome::Plains);
        let config = GenerationConfig::new(7, 300, 300);
        let placer = SettlementPlacer::new(&tiles, &biomes);
        let mut layout = placer.generate(&config, &mut utils::create_rng(&config)).unwrap();
        let copy = layout.settlements[0].clone();
        layout.settlements.push(copy);
        layout.safe_zones.push(layout.safe_zones[0]);
        assert!(placer.validate(&layout, &config).is_err());
    }
}
