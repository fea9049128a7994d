//! # Reachability
//!
//! Flood-fill queries over walkable tiles, backed by the `pathfinding` crate.

use crate::game::{Grid, Position, TileType};
use crate::utils::Rect;
use pathfinding::prelude::bfs_reach;
use std::collections::HashSet;

/// Collects every walkable position reachable from `start` without leaving `bounds`.
///
/// Returns an empty set when `start` itself is not walkable.
pub fn reachable_within(tiles: &Grid<TileType>, start: Position, bounds: Rect) -> HashSet<Position> {
    let walkable = |pos: &Position| {
        bounds.contains(*pos) && tiles.get(*pos).is_some_and(|tile| tile.is_walkable())
    };
    if !walkable(&start) {
        return HashSet::new();
    }

    bfs_reach(start, |pos| {
        pos.cardinal_adjacent_positions()
            .into_iter()
            .filter(walkable)
            .collect::<Vec<_>>()
    })
    .collect()
}
