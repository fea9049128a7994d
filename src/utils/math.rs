//! # Geometry Helpers
//!
//! Axis-aligned rectangles and distance helpers used by placement and spawning.

use crate::game::Position;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in tile coordinates.
///
/// `x`/`y` is the top-left cell; the rectangle covers `width` by `height` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearthvale::Rect;
    ///
    /// let rect = Rect::new(5, 5, 10, 8);
    /// assert_eq!(rect.right(), 15);
    /// assert_eq!(rect.bottom(), 13);
    /// ```
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a square of side `size` centered on `center`.
    pub fn centered(center: Position, size: u32) -> Self {
        let half = size as i32 / 2;
        Self::new(center.x - half, center.y - half, size, size)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Center cell, rounding toward the bottom-right for even sizes.
    pub fn center(&self) -> Position {
        Position::new(
            self.x + self.width as i32 / 2,
            self.y + self.height as i32 / 2,
        )
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Checks if a position is inside this rectangle.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x && pos.y >= self.y && pos.x < self.right() && pos.y < self.bottom()
    }

    /// Checks if a position is on the outer ring of this rectangle.
    pub fn is_border(&self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.x == self.x
                || pos.y == self.y
                || pos.x == self.right() - 1
                || pos.y == self.bottom() - 1)
    }

    /// Checks if `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Checks whether two rectangles come closer than `margin` cells.
    ///
    /// A margin of zero reports only true interpenetration, so rectangles that
    /// share an edge do not overlap. A positive margin additionally rejects
    /// rectangles separated by fewer than `margin` cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearthvale::Rect;
    ///
    /// let a = Rect::new(0, 0, 5, 5);
    /// let touching = Rect::new(5, 0, 5, 5);
    /// assert!(!a.overlaps_with_margin(&touching, 0));
    /// assert!(a.overlaps_with_margin(&touching, 1));
    /// ```
    pub fn overlaps_with_margin(&self, other: &Rect, margin: i32) -> bool {
        !(self.x >= other.right() + margin
            || other.x >= self.right() + margin
            || self.y >= other.bottom() + margin
            || other.y >= self.bottom() + margin)
    }

    /// Checks for true interpenetration.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_with_margin(other, 0)
    }

    /// Gets all positions within this rectangle in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (x0, x1, y0, y1) = (self.x, self.right(), self.y, self.bottom());
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| Position::new(x, y)))
    }
}

/// Distance from `pos` to the nearest of `centers`, or `None` if there are none.
pub fn nearest_distance(pos: Position, centers: impl IntoIterator<Item = Position>) -> Option<f64> {
    centers
        .into_iter()
        .map(|center| pos.euclidean_distance(center))
        .min_by(|a, b| a.total_cmp(b))
}
