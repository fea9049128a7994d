//! # Display Management
//!
//! Draws a [`WorldData`] with macroquad: one colored square per tile, entity
//! markers on top and a status line along the bottom edge.

use crate::game::{Position, WorldData};
use crate::input::ViewerInput;
use crate::rendering::{
    cell_color, chest_color, BOSS_COLOR, ENEMY_COLOR, NPC_COLOR, OBJECT_COLOR, SPAWN_COLOR,
};
use macroquad::prelude::*;

const MIN_TILE_SIZE: f32 = 1.0;
const MAX_TILE_SIZE: f32 = 32.0;
const ZOOM_STEP: f32 = 1.25;
/// Tiles moved per frame while a pan key is held, at 8px tiles
const PAN_SPEED: f32 = 1.5;
const STATUS_HEIGHT: f32 = 28.0;

/// Which part of the world is on screen and how large tiles are drawn.
///
/// Pure arithmetic so it can be tested without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// World x of the left screen edge, in tiles
    pub x: f32,
    /// World y of the top screen edge, in tiles
    pub y: f32,
    /// Tile size in pixels
    pub tile_size: f32,
}

impl Viewport {
    pub fn new(tile_size: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            tile_size: tile_size.clamp(MIN_TILE_SIZE, MAX_TILE_SIZE),
        }
    }

    /// Number of whole or partial tiles that fit in the given pixel area.
    pub fn visible_tiles(&self, pixel_width: f32, pixel_height: f32) -> (u32, u32) {
        (
            (pixel_width / self.tile_size).ceil().max(0.0) as u32,
            (pixel_height / self.tile_size).ceil().max(0.0) as u32,
        )
    }

    /// Moves the view; distance shrinks as tiles get larger.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let scale = PAN_SPEED * 8.0 / self.tile_size;
        self.x += dx * scale;
        self.y += dy * scale;
    }

    /// Zooms around the center of the given pixel area.
    pub fn zoom(&mut self, factor: f32, pixel_width: f32, pixel_height: f32) {
        let center_x = self.x + pixel_width / self.tile_size / 2.0;
        let center_y = self.y + pixel_height / self.tile_size / 2.0;
        self.tile_size = (self.tile_size * factor).clamp(MIN_TILE_SIZE, MAX_TILE_SIZE);
        self.x = center_x - pixel_width / self.tile_size / 2.0;
        self.y = center_y - pixel_height / self.tile_size / 2.0;
    }

    pub fn center_on(&mut self, pos: Position, pixel_width: f32, pixel_height: f32) {
        self.x = pos.x as f32 + 0.5 - pixel_width / self.tile_size / 2.0;
        self.y = pos.y as f32 + 0.5 - pixel_height / self.tile_size / 2.0;
    }

    /// Keeps the view over the world. A world smaller than the view is pinned
    /// to the top-left corner.
    pub fn clamp_to(&mut self, world_width: u32, world_height: u32, pixel_width: f32, pixel_height: f32) {
        let max_x = (world_width as f32 - pixel_width / self.tile_size).max(0.0);
        let max_y = (world_height as f32 - pixel_height / self.tile_size).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
        self.y = self.y.clamp(0.0, max_y);
    }

    /// Pixel coordinates of a tile's top-left corner.
    pub fn to_screen(&self, pos: Position) -> (f32, f32) {
        (
            (pos.x as f32 - self.x) * self.tile_size,
            (pos.y as f32 - self.y) * self.tile_size,
        )
    }

    /// Tile under a pixel.
    pub fn to_world(&self, pixel_x: f32, pixel_y: f32) -> Position {
        Position::new(
            (self.x + pixel_x / self.tile_size).floor() as i32,
            (self.y + pixel_y / self.tile_size).floor() as i32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(8.0)
    }
}

/// Macroquad preview window state.
pub struct WorldPreview {
    pub viewport: Viewport,
    /// Draw NPCs, enemies, objects, chests and settlement outlines
    pub show_entities: bool,
}

impl Default for WorldPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldPreview {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
            show_entities: true,
        }
    }

    /// Pixel size of the map area, excluding the status line.
    pub fn map_area() -> (f32, f32) {
        (screen_width(), (screen_height() - STATUS_HEIGHT).max(0.0))
    }

    /// Centers on the player spawn of a freshly generated world.
    pub fn focus(&mut self, world: &WorldData) {
        let (w, h) = Self::map_area();
        self.viewport.center_on(world.player_spawn, w, h);
        self.viewport.clamp_to(world.width, world.height, w, h);
    }

    /// Applies a view input. Returns false for inputs the view does not handle.
    pub fn apply(&mut self, input: ViewerInput, world: &WorldData) -> bool {
        let (w, h) = Self::map_area();
        match input {
            ViewerInput::PanUp => self.viewport.pan(0.0, -1.0),
            ViewerInput::PanDown => self.viewport.pan(0.0, 1.0),
            ViewerInput::PanLeft => self.viewport.pan(-1.0, 0.0),
            ViewerInput::PanRight => self.viewport.pan(1.0, 0.0),
            ViewerInput::ZoomIn => self.viewport.zoom(ZOOM_STEP, w, h),
            ViewerInput::ZoomOut => self.viewport.zoom(1.0 / ZOOM_STEP, w, h),
            ViewerInput::ToggleEntities => self.show_entities = !self.show_entities,
            ViewerInput::Regenerate | ViewerInput::Quit => return false,
        }
        self.viewport.clamp_to(world.width, world.height, w, h);
        true
    }

    /// Draws one frame.
    pub fn render(&self, world: &WorldData) {
        clear_background(BLACK);
        self.render_tiles(world);
        if self.show_entities {
            self.render_entities(world);
        }
        self.render_status(world);
    }

    fn render_tiles(&self, world: &WorldData) {
        let (w, h) = Self::map_area();
        let (cols, rows) = self.viewport.visible_tiles(w, h);
        let left = self.viewport.x.floor() as i32;
        let top = self.viewport.y.floor() as i32;
        let size = self.viewport.tile_size;

        for row in 0..=rows as i32 {
            for col in 0..=cols as i32 {
                let pos = Position::new(left + col, top + row);
                let (Some(tile), Some(biome)) = (world.tile_at(pos), world.biome_at(pos)) else {
                    continue;
                };
                let (sx, sy) = self.viewport.to_screen(pos);
                if sy >= h {
                    continue;
                }
                draw_rectangle(sx, sy, size, size, cell_color(tile, biome));
            }
        }
    }

    fn render_entities(&self, world: &WorldData) {
        let size = self.viewport.tile_size;
        let (w, h) = Self::map_area();
        let visible = |pos: Position| {
            let (sx, sy) = self.viewport.to_screen(pos);
            sx > -size && sy > -size && sx < w && sy < h
        };
        let dot = |pos: Position, scale: f32, color: Color| {
            if visible(pos) {
                let (sx, sy) = self.viewport.to_screen(pos);
                let radius = (size * scale).max(1.5);
                draw_circle(sx + size / 2.0, sy + size / 2.0, radius, color);
            }
        };

        for settlement in &world.settlements {
            let (sx, sy) = self.viewport.to_screen(settlement.footprint.top_left());
            draw_rectangle_lines(
                sx,
                sy,
                settlement.footprint.width as f32 * size,
                settlement.footprint.height as f32 * size,
                1.0,
                Color::new(1.0, 1.0, 1.0, 0.4),
            );
        }

        for object in &world.objects {
            dot(object.position, 0.25, OBJECT_COLOR);
        }
        for chest in &world.chests {
            if visible(chest.position) {
                let (sx, sy) = self.viewport.to_screen(chest.position);
                draw_rectangle(sx + size * 0.2, sy + size * 0.2, size * 0.6, size * 0.6, chest_color(chest.tier));
            }
        }
        for npc in &world.npcs {
            dot(npc.position, 0.4, NPC_COLOR);
        }
        for enemy in &world.enemies {
            dot(enemy.position, 0.35, ENEMY_COLOR);
        }
        for boss in &world.bosses {
            dot(boss.position, 0.8, BOSS_COLOR);
        }

        if visible(world.player_spawn) {
            let (sx, sy) = self.viewport.to_screen(world.player_spawn);
            draw_rectangle_lines(sx - size, sy - size, size * 3.0, size * 3.0, 2.0, SPAWN_COLOR);
        }
    }

    fn render_status(&self, world: &WorldData) {
        let (_, map_height) = Self::map_area();
        draw_rectangle(0.0, map_height, screen_width(), STATUS_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.85));
        draw_text(
            &status_line(world, self.show_entities),
            8.0,
            map_height + STATUS_HEIGHT * 0.7,
            18.0,
            WHITE,
        );
    }
}

/// Text shown under the map.
pub fn status_line(world: &WorldData, show_entities: bool) -> String {
    format!(
        "seed {} | {}x{} | settlements {} | buildings {} | npcs {} | enemies {} | bosses {} | chests {} | [R] new [E] entities {} [Esc] quit",
        world.seed,
        world.width,
        world.height,
        world.settlements.len(),
        world.building_count(),
        world.npcs.len(),
        world.enemies.len(),
        world.bosses.len(),
        world.chests.len(),
        if show_entities { "on" } else { "off" },
    )
}
