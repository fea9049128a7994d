//! Colors for tiles, biomes and entity markers.

use crate::game::{Biome, ChestTier, TileType};
use macroquad::prelude::*;

/// How strongly the biome color bleeds into ground tiles.
const BIOME_TINT_STRENGTH: f32 = 0.2;

/// Base color of a tile.
pub fn tile_color(tile: TileType) -> Color {
    match tile {
        TileType::Grass => Color::from_rgba(86, 160, 70, 255),
        TileType::Dirt => Color::from_rgba(134, 100, 64, 255),
        TileType::Stone => Color::from_rgba(150, 150, 150, 255),
        TileType::Sand => Color::from_rgba(222, 200, 130, 255),
        TileType::Snow => Color::from_rgba(236, 240, 248, 255),
        TileType::ForestFloor => Color::from_rgba(52, 96, 44, 255),
        TileType::Swamp => Color::from_rgba(78, 96, 60, 255),
        TileType::Water => Color::from_rgba(48, 96, 200, 255),
        TileType::Wall => Color::from_rgba(40, 36, 36, 255),
        TileType::WallCornerTopLeft
        | TileType::WallCornerTopRight
        | TileType::WallCornerBottomLeft
        | TileType::WallCornerBottomRight
        | TileType::WallHorizontal
        | TileType::WallVertical => Color::from_rgba(110, 70, 50, 255),
        TileType::WindowHorizontal | TileType::WindowVertical => Color::from_rgba(150, 210, 230, 255),
        TileType::Door => Color::from_rgba(190, 130, 40, 255),
        TileType::BrickFloor => Color::from_rgba(170, 90, 70, 255),
        TileType::Well => Color::from_rgba(70, 140, 210, 255),
    }
}

pub fn biome_color(biome: Biome) -> Color {
    match biome {
        Biome::Plains => Color::from_rgba(140, 190, 90, 255),
        Biome::Forest => Color::from_rgba(30, 90, 40, 255),
        Biome::Desert => Color::from_rgba(230, 190, 110, 255),
        Biome::Snow => Color::from_rgba(250, 250, 255, 255),
        Biome::Swamp => Color::from_rgba(70, 80, 50, 255),
    }
}

/// Linear blend from `a` toward `b`.
pub fn blend(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Color a cell is drawn with. Ground tiles pick up a hint of their biome;
/// structures and water keep their own color.
pub fn cell_color(tile: TileType, biome: Biome) -> Color {
    let base = tile_color(tile);
    if tile.is_ground() {
        blend(base, biome_color(biome), BIOME_TINT_STRENGTH)
    } else {
        base
    }
}

pub fn chest_color(tier: ChestTier) -> Color {
    match tier {
        ChestTier::Wooden => Color::from_rgba(150, 100, 50, 255),
        ChestTier::Iron => Color::from_rgba(180, 180, 195, 255),
        ChestTier::Gold => GOLD,
    }
}

pub const NPC_COLOR: Color = YELLOW;
pub const ENEMY_COLOR: Color = RED;
pub const BOSS_COLOR: Color = MAGENTA;
pub const OBJECT_COLOR: Color = DARKGREEN;
pub const SPAWN_COLOR: Color = WHITE;
