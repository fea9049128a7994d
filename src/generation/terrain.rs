//! # Terrain Generation
//!
//! Turns a biome grid into concrete ground tiles, sparse water and the
//! impassable world border.

use crate::game::{Biome, Grid, Position, TileType};
use crate::generation::{GenerationConfig, Generator};
use crate::{HearthvaleError, HearthvaleResult};
use rand::{rngs::StdRng, Rng};

/// Ground cover rules for one biome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeTerrain {
    /// Default ground cover
    pub primary: TileType,
    /// Cover laid down with the configured secondary chance
    pub secondary: TileType,
    /// Chance of a cell becoming water
    pub water_chance: f64,
}

impl BiomeTerrain {
    /// Terrain rules for a biome.
    ///
    /// Desert and snow use grass as their secondary cover (scrub and thaw
    /// patches) so grass-bound decorations still appear there.
    pub fn for_biome(biome: Biome) -> Self {
        let (primary, secondary, water_chance) = match biome {
            Biome::Plains => (TileType::Grass, TileType::Dirt, 0.002),
            Biome::Forest => (TileType::Grass, TileType::ForestFloor, 0.003),
            Biome::Desert => (TileType::Sand, TileType::Grass, 0.001),
            Biome::Snow => (TileType::Snow, TileType::Grass, 0.002),
            Biome::Swamp => (TileType::Swamp, TileType::Grass, 0.02),
        };
        Self {
            primary,
            secondary,
            water_chance,
        }
    }
}

/// Materializes tiles from a biome grid.
///
/// Cells are visited in row-major order. Each one draws the secondary-cover
/// roll and then the water roll, so the random stream is consumed identically
/// for every seed regardless of outcome.
#[derive(Debug, Clone, Copy)]
pub struct TerrainGenerator<'a> {
    pub biomes: &'a Grid<Biome>,
}

impl<'a> TerrainGenerator<'a> {
    pub fn new(biomes: &'a Grid<Biome>) -> Self {
        Self { biomes }
    }

    fn stamp_border(tiles: &mut Grid<TileType>) {
        let (w, h) = (tiles.width() as i32, tiles.height() as i32);
        for x in 0..w {
            tiles.set(Position::new(x, 0), TileType::Wall);
            tiles.set(Position::new(x, h - 1), TileType::Wall);
        }
        for y in 0..h {
            tiles.set(Position::new(0, y), TileType::Wall);
            tiles.set(Position::new(w - 1, y), TileType::Wall);
        }
    }
}

impl Generator<Grid<TileType>> for TerrainGenerator<'_> {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> HearthvaleResult<Grid<TileType>> {
        let mut tiles = Grid::from_fn(self.biomes.width(), self.biomes.height(), |pos| {
            let biome = self.biomes.get(pos).copied().unwrap_or(Biome::Plains);
            let terrain = BiomeTerrain::for_biome(biome);
            let mut tile = terrain.primary;
            if rng.gen_bool(config.secondary_tile_chance) {
                tile = terrain.secondary;
            }
            if rng.gen_bool(terrain.water_chance) {
                tile = TileType::Water;
            }
            tile
        });
        Self::stamp_border(&mut tiles);

        let water = tiles.values().filter(|t| **t == TileType::Water).count();
        log::info!(
            "materialized {}x{} terrain ({} water tiles)",
            tiles.width(),
            tiles.height(),
            water
        );
        Ok(tiles)
    }

    fn validate(&self, tiles: &Grid<TileType>, _config: &GenerationConfig) -> HearthvaleResult<()> {
        if tiles.width() != self.biomes.width() || tiles.height() != self.biomes.height() {
            return Err(HearthvaleError::GenerationFailed(
                "tile grid and biome grid dimensions differ".to_string(),
            ));
        }
        if let Some((pos, tile)) = tiles
            .iter()
            .find(|(pos, tile)| tiles.is_border(*pos) && **tile != TileType::Wall)
        {
            return Err(HearthvaleError::GenerationFailed(format!(
                "border cell {:?} is {:?}, expected Wall",
                pos, tile
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "TerrainGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils;

    fn materialize(biome: Biome, seed: u64) -> Grid<TileType> {
        let config = GenerationConfig::new(seed, 60, 40);
        let biomes = Grid::new(config.width, config.height, biome);
        let mut rng = utils::create_rng(&config);
        TerrainGenerator::new(&biomes).generate(&config, &mut rng).unwrap()
    }

    #[test]
    fn test_border_is_wall() {
        let config = GenerationConfig::new(8, 25, 17);
        let biomes = Grid::new(25, 17, Biome::Swamp);
        let generator = TerrainGenerator::new(&biomes);
        let mut rng = utils::create_rng(&config);
        let tiles = generator.generate(&config, &mut rng).unwrap();

        assert!(generator.validate(&tiles, &config).is_ok());
        for (pos, tile) in tiles.iter() {
            if tiles.is_border(pos) {
                assert_eq!(*tile, TileType::Wall);
            } else {
                assert_ne!(*tile, TileType::Wall);
            }
        }
    }

    #[test]
    fn test_tiles_follow_biome_cover() {
        for biome in Biome::ALL {
            let terrain = BiomeTerrain::for_biome(biome);
            let tiles = materialize(biome, 3);
            for (pos, tile) in tiles.iter().filter(|(pos, _)| !tiles.is_border(*pos)) {
                assert!(
                    *tile == terrain.primary || *tile == terrain.secondary || *tile == TileType::Water,
                    "{:?} at {:?} in {:?}",
                    tile,
                    pos,
                    biome
                );
            }
        }
    }

    #[test]
    fn test_primary_cover_dominates() {
        let tiles = materialize(Biome::Plains, 11);
        let grass = tiles.values().filter(|t| **t == TileType::Grass).count();
        let dirt = tiles.values().filter(|t| **t == TileType::Dirt).count();
        assert!(grass > dirt * 3, "grass {} dirt {}", grass, dirt);
    }

    #[test]
    fn test_terrain_is_deterministic() {
        assert_eq!(materialize(Biome::Forest, 42), materialize(Biome::Forest, 42));
        assert_ne!(materialize(Biome::Forest, 42), materialize(Biome::Forest, 43));
    }

    #[test]
    fn test_validate_rejects_open_border() {
        let config = GenerationConfig::new(1, 10, 10);
        let biomes = Grid::new(10, 10, Biome::Plains);
        let generator = TerrainGenerator::new(&biomes);
        let mut rng = utils::create_rng(&config);
        let mut tiles = generator.generate(&config, &mut rng).unwrap();
        tiles.set(Position::new(0, 4), TileType::Grass);
        assert!(generator.validate(&tiles, &config).is_err());
    }
}
