//! # Building Layout
//!
//! Building templates, wall/window/door stamping, placement inside a
//! settlement footprint and the paths that connect buildings to the plaza.

use crate::game::{Grid, Position, TileType};
use crate::utils::Rect;
use crate::{HearthvaleError, HearthvaleResult};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

/// Chance of a top or bottom wall segment being a window.
const HORIZONTAL_WINDOW_CHANCE: f64 = 0.2;
/// Chance of a left or right wall segment being a window.
const VERTICAL_WINDOW_CHANCE: f64 = 0.15;
/// Sides shorter than this get a single door.
const DOUBLE_DOOR_MIN_SPAN: u32 = 6;

const DOOR_SIDE_WEIGHTS: [(DoorSide, u32); 4] = [
    (DoorSide::Bottom, 35),
    (DoorSide::Top, 20),
    (DoorSide::Left, 20),
    (DoorSide::Right, 25),
];

/// Wall that carries a building's entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Fixed description of a building in an archetype roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingTemplate {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    /// Occupant type of the resident NPC, if any
    pub occupant: Option<&'static str>,
    pub has_shop: bool,
}

impl BuildingTemplate {
    pub const fn new(
        name: &'static str,
        width: u32,
        height: u32,
        occupant: Option<&'static str>,
        has_shop: bool,
    ) -> Self {
        Self {
            name,
            width,
            height,
            occupant,
            has_shop,
        }
    }
}

/// A building stamped into the tile grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    /// Footprint in world coordinates, walls included
    pub footprint: Rect,
    pub occupant: Option<String>,
    pub has_shop: bool,
    pub door_side: DoorSide,
    pub doors: Vec<Position>,
}

impl Building {
    /// Center tile; always interior floor.
    pub fn center(&self) -> Position {
        self.footprint.center()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Stamps walls, windows, floor and doors for `footprint`.
///
/// Rolls window chances per edge segment in row-major order, then draws the
/// door side. Returns the door side and door positions.
pub fn stamp_building(
    tiles: &mut Grid<TileType>,
    footprint: Rect,
    rng: &mut StdRng,
) -> HearthvaleResult<(DoorSide, Vec<Position>)> {
    let (left, top) = (footprint.x, footprint.y);
    let (right, bottom) = (footprint.right() - 1, footprint.bottom() - 1);

    for pos in footprint.positions() {
        let tile = match (pos.x, pos.y) {
            (x, y) if x == left && y == top => TileType::WallCornerTopLeft,
            (x, y) if x == right && y == top => TileType::WallCornerTopRight,
            (x, y) if x == left && y == bottom => TileType::WallCornerBottomLeft,
            (x, y) if x == right && y == bottom => TileType::WallCornerBottomRight,
            (_, y) if y == top || y == bottom => {
                if rng.gen_bool(HORIZONTAL_WINDOW_CHANCE) {
                    TileType::WindowHorizontal
                } else {
                    TileType::WallHorizontal
                }
            }
            (x, _) if x == left || x == right => {
                if rng.gen_bool(VERTICAL_WINDOW_CHANCE) {
                    TileType::WindowVertical
                } else {
                    TileType::WallVertical
                }
            }
            _ => TileType::BrickFloor,
        };
        tiles.set(pos, tile);
    }

    let side = DOOR_SIDE_WEIGHTS
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(side, _)| *side)
        .map_err(|e| HearthvaleError::GenerationFailed(format!("door side weights: {}", e)))?;

    let doors = door_positions(footprint, side);
    for door in &doors {
        tiles.set(*door, TileType::Door);
    }
    Ok((side, doors))
}

/// Door cells for a side: one in the middle of short sides, two adjacent
/// centered cells otherwise.
pub fn door_positions(footprint: Rect, side: DoorSide) -> Vec<Position> {
    let span = match side {
        DoorSide::Top | DoorSide::Bottom => footprint.width,
        DoorSide::Left | DoorSide::Right => footprint.height,
    };
    let middle = span as i32 / 2;
    let offsets = if span < DOUBLE_DOOR_MIN_SPAN {
        vec![middle]
    } else {
        vec![middle - 1, middle]
    };

    offsets
        .into_iter()
        .map(|offset| match side {
            DoorSide::Top => Position::new(footprint.x + offset, footprint.y),
            DoorSide::Bottom => Position::new(footprint.x + offset, footprint.bottom() - 1),
            DoorSide::Left => Position::new(footprint.x, footprint.y + offset),
            DoorSide::Right => Position::new(footprint.right() - 1, footprint.y + offset),
        })
        .collect()
}

/// Places a roster of buildings inside a settlement footprint.
///
/// Each template gets up to `attempts` uniformly drawn spots; a spot is
/// rejected if it comes within one tile of the plaza or overlaps a building
/// already placed. Templates that exhaust their attempts are skipped.
pub fn place_buildings(
    tiles: &mut Grid<TileType>,
    area: Rect,
    plaza: Rect,
    roster: &[BuildingTemplate],
    attempts: u32,
    rng: &mut StdRng,
) -> HearthvaleResult<Vec<Building>> {
    let mut buildings: Vec<Building> = Vec::with_capacity(roster.len());

    for template in roster {
        if template.width > area.width || template.height > area.height {
            log::warn!("{} does not fit a {}x{} settlement", template.name, area.width, area.height);
            continue;
        }

        let mut spot = None;
        for _ in 0..attempts {
            let x = rng.gen_range(area.x..=area.right() - template.width as i32);
            let y = rng.gen_range(area.y..=area.bottom() - template.height as i32);
            let candidate = Rect::new(x, y, template.width, template.height);

            if candidate.overlaps_with_margin(&plaza, 1) {
                continue;
            }
            if buildings.iter().any(|b| candidate.overlaps(&b.footprint)) {
                continue;
            }
            spot = Some(candidate);
            break;
        }

        let Some(footprint) = spot else {
            log::warn!(
                "could not place {} after {} attempts in settlement at ({}, {})",
                template.name,
                attempts,
                area.x,
                area.y
            );
            continue;
        };

        let (door_side, doors) = stamp_building(tiles, footprint, rng)?;
        buildings.push(Building {
            name: template.name.to_string(),
            footprint,
            occupant: template.occupant.map(str::to_string),
            has_shop: template.has_shop,
            door_side,
            doors,
        });
    }

    Ok(buildings)
}

/// Material used for paths laid over a settlement's ground tile.
pub fn path_material(ground: TileType) -> TileType {
    match ground {
        TileType::ForestFloor => TileType::Dirt,
        _ => TileType::Stone,
    }
}

/// Lays an L-shaped path: along `from`'s row to `to`'s column, then along
/// that column to `to`.
///
/// Structure tiles and plaza cells are left as they are.
pub fn lay_path(tiles: &mut Grid<TileType>, plaza: Rect, from: Position, to: Position, material: TileType) {
    let horizontal = range_between(from.x, to.x).map(|x| Position::new(x, from.y));
    let vertical = range_between(from.y, to.y).map(|y| Position::new(to.x, y));

    for pos in horizontal.chain(vertical) {
        if plaza.contains(pos) {
            continue;
        }
        if let Some(tile) = tiles.get_mut(pos) {
            if !tile.is_structure() {
                *tile = material;
            }
        }
    }
}

fn range_between(a: i32, b: i32) -> std::ops::RangeInclusive<i32> {
    a.min(b)..=a.max(b)
}
