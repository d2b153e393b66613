//! The occupancy grid for one level.
//!
//! [`Tile`] is the binary cell state (open floor or wall) and [`Grid`] the
//! fixed-size rectangular arena of tiles, stored row-major and indexed by
//! zero-based `(column, row)` coordinates.

use crate::geom::Point;

/// The occupancy state of a single cell.
///
/// New grids start solid: `Wall` is the default and generation carves
/// `Open` cells out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Open,
    #[default]
    Wall,
}

impl Tile {
    /// Whether the tile is open floor.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }
}

/// A rectangular arena of [`Tile`]s, stored row-major
/// (`row * width + column`).
///
/// The grid itself is a plain value: it is built once per level, handed to
/// the caller by value, and read-only to every consumer except the single
/// wall-breaking mutation the maze crate exposes. The arena invariant — every
/// border cell is `Wall` — is maintained by the generators, not enforced
/// here, so that tests and fixtures can assemble arbitrary layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a new grid filled with `Wall`. Non-positive dimensions yield
    /// an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; (width * height) as usize],
        }
    }

    /// Width of the grid in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether the point lies on the outer border ring of the arena.
    ///
    /// Returns `false` for points outside the grid entirely.
    #[inline]
    pub fn is_border(&self, p: Point) -> bool {
        self.contains(p)
            && (p.x == 0 || p.y == 0 || p.x == self.width - 1 || p.y == self.height - 1)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Get the tile at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[self.index(p)])
    }

    /// Whether the point is an in-bounds `Open` cell.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Open)
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx] = tile;
    }

    /// Fill the entire grid with the given tile.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Count how many cells hold the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// All `Open` cell coordinates, in row-major order.
    ///
    /// The ordering is part of the contract: spawn-placement code that
    /// partitions this set gets the same sequence for the same grid.
    pub fn open_cells(&self) -> Vec<Point> {
        self.iter()
            .filter(|&(_, t)| t.is_open())
            .map(|(p, _)| p)
            .collect()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(i, &t)| {
            let i = i as i32;
            (Point::new(i % width, i / width), t)
        })
    }
}
