//! # World Representation
//!
//! Tile codes, biome classes and the dense grids that hold them.

use crate::game::Position;
use serde::{Deserialize, Serialize};

/// Concrete tile placed in a world cell.
///
/// The discriminants are stable codes; persisted worlds and renderers rely on
/// them, and serialization writes the code rather than the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum TileType {
    Grass = 0,
    Dirt = 1,
    Stone = 2,
    Sand = 3,
    Snow = 4,
    ForestFloor = 5,
    Swamp = 6,
    Water = 7,
    /// Impassable wall, also used for the world border
    Wall = 8,
    WallCornerTopLeft = 9,
    WallCornerTopRight = 10,
    WallCornerBottomLeft = 11,
    WallCornerBottomRight = 12,
    WallHorizontal = 13,
    WallVertical = 14,
    WindowHorizontal = 15,
    WindowVertical = 16,
    Door = 17,
    BrickFloor = 18,
    /// Settlement landmark at the plaza
    Well = 19,
}

impl TileType {
    /// Every tile type, in code order.
    pub const ALL: [TileType; 20] = [
        TileType::Grass,
        TileType::Dirt,
        TileType::Stone,
        TileType::Sand,
        TileType::Snow,
        TileType::ForestFloor,
        TileType::Swamp,
        TileType::Water,
        TileType::Wall,
        TileType::WallCornerTopLeft,
        TileType::WallCornerTopRight,
        TileType::WallCornerBottomLeft,
        TileType::WallCornerBottomRight,
        TileType::WallHorizontal,
        TileType::WallVertical,
        TileType::WindowHorizontal,
        TileType::WindowVertical,
        TileType::Door,
        TileType::BrickFloor,
        TileType::Well,
    ];

    /// Returns the stable numeric code of this tile.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks a tile up by its numeric code.
    pub fn from_code(code: u8) -> Option<TileType> {
        Self::ALL.get(code as usize).copied()
    }

    /// Natural ground covers that terrain generation lays down.
    pub fn is_ground(self) -> bool {
        matches!(
            self,
            TileType::Grass
                | TileType::Dirt
                | TileType::Stone
                | TileType::Sand
                | TileType::Snow
                | TileType::ForestFloor
                | TileType::Swamp
        )
    }

    /// Whether creatures can stand on this tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearthvale::TileType;
    ///
    /// assert!(TileType::Grass.is_walkable());
    /// assert!(TileType::Door.is_walkable());
    /// assert!(!TileType::Water.is_walkable());
    /// assert!(!TileType::WindowVertical.is_walkable());
    /// ```
    pub fn is_walkable(self) -> bool {
        self.is_ground() || matches!(self, TileType::Door | TileType::BrickFloor)
    }

    /// Tiles that belong to a placed structure and must never be carved over.
    pub fn is_structure(self) -> bool {
        matches!(
            self,
            TileType::WallCornerTopLeft
                | TileType::WallCornerTopRight
                | TileType::WallCornerBottomLeft
                | TileType::WallCornerBottomRight
                | TileType::WallHorizontal
                | TileType::WallVertical
                | TileType::WindowHorizontal
                | TileType::WindowVertical
                | TileType::Door
                | TileType::BrickFloor
                | TileType::Well
        )
    }
}

impl From<TileType> for u8 {
    fn from(tile: TileType) -> u8 {
        tile.code()
    }
}

impl TryFrom<u8> for TileType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        TileType::from_code(code).ok_or_else(|| format!("unknown tile code {}", code))
    }
}

/// Coarse terrain classification of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Biome {
    Plains,
    Forest,
    Desert,
    Snow,
    Swamp,
}

impl Biome {
    /// Every biome, in declaration order.
    pub const ALL: [Biome; 5] = [
        Biome::Plains,
        Biome::Forest,
        Biome::Desert,
        Biome::Snow,
        Biome::Swamp,
    ];

    /// Human-readable biome name.
    pub fn name(self) -> &'static str {
        match self {
            Biome::Plains => "plains",
            Biome::Forest => "forest",
            Biome::Desert => "desert",
            Biome::Snow => "snow",
            Biome::Swamp => "swamp",
        }
    }
}

/// Dense, row-major 2D grid.
///
/// Out-of-range lookups return `None` rather than panicking, so callers can
/// look up neighbours near the border freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = String;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        let expected = raw.width as u64 * raw.height as u64;
        if raw.cells.len() as u64 != expected {
            return Err(format!(
                "grid of {}x{} needs {} cells, found {}",
                raw.width,
                raw.height,
                expected,
                raw.cells.len()
            ));
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a grid filled with `value`.
    pub fn new(width: u32, height: u32, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by evaluating `f` at every position in row-major order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(Position) -> T) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(f(Position::new(x, y)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks whether a position lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Checks whether a position lies on the outermost ring.
    pub fn is_border(&self, pos: Position) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0
                || pos.y == 0
                || pos.x as u32 == self.width - 1
                || pos.y as u32 == self.height - 1)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// Gets the value at a position.
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Gets the value at a position mutably.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.index(pos).map(move |i| &mut self.cells[i])
    }

    /// Sets the value at a position. Returns false if the position is out of bounds.
    pub fn set(&mut self, pos: Position, value: T) -> bool {
        match self.get_mut(pos) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Iterates over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            (
                Position::new((i % width) as i32, (i / width) as i32),
                cell,
            )
        })
    }

    /// Iterates over the cell values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    /// Maps every cell into a new grid of the same dimensions.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Copies the grid into nested rows, `rows[y][x]`.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        if self.width == 0 {
            return vec![Vec::new(); self.height as usize];
        }
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

/// Tile grid of a generated world.
pub type TileGrid = Grid<TileType>;

/// Biome grid of a generated world.
pub type BiomeGrid = Grid<Biome>;

impl Grid<TileType> {
    /// Tile codes as nested rows.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.map(|tile| tile.code()).to_rows()
    }

    /// Derives the walkability grid.
    pub fn walkability(&self) -> Grid<bool> {
        self.map(|tile| tile.is_walkable())
    }
}
