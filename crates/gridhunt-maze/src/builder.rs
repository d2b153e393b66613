//! Randomized depth-first maze carving.

use std::fmt;

use gridhunt_core::{Grid, Point, Tile};
use rand::{Rng, RngExt};

/// Carves fully-connected mazes into solid grids.
///
/// The carve is a spanning-tree growth over the lattice of odd-coordinate
/// cells: passages advance two cells at a time and open the wall cell in
/// between, so parallel corridors always keep at least one cell of wall
/// between them. Every open cell is reachable from every other by
/// construction; no post-hoc repair pass is needed.
pub struct MazeBuilder<R: Rng> {
    rng: R,
}

impl<R: Rng> MazeBuilder<R> {
    /// Create a builder using the given source of randomness.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a `width` × `height` maze.
    ///
    /// The returned grid has a solid border ring and a connected interior of
    /// corridors; use [`Grid::open_cells`] for the set of floor cells.
    /// Dimensions below 3×3 leave no interior to carve and fail with
    /// [`MazeError::InvalidDimensions`].
    pub fn carve(&mut self, width: i32, height: i32) -> Result<Grid, MazeError> {
        if width < 3 || height < 3 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let mut grid = Grid::new(width, height);

        let origin = self.odd_interior_cell(width, height);
        grid.set(origin, Tile::Open);

        // Explicit visit stack instead of recursion: backtracking depth can
        // reach width*height/4 on larger arenas.
        let mut stack = vec![origin];
        let mut frontier: Vec<Point> = Vec::with_capacity(4);

        while let Some(&cur) = stack.last() {
            frontier.clear();
            for d in Point::CARDINALS {
                let next = cur + d * 2;
                if interior(next, width, height) && grid.at(next) == Some(Tile::Wall) {
                    frontier.push(next);
                }
            }

            match frontier.len() {
                0 => {
                    stack.pop();
                }
                n => {
                    let next = frontier[self.rng.random_range(0..n)];
                    let between = cur + (next - cur) / 2;
                    grid.set(between, Tile::Open);
                    grid.set(next, Tile::Open);
                    stack.push(next);
                }
            }
        }

        seal_border(&mut grid);
        Ok(grid)
    }

    /// A uniformly random interior cell with both coordinates odd.
    fn odd_interior_cell(&mut self, width: i32, height: i32) -> Point {
        let x = 1 + 2 * self.rng.random_range(0..(width - 1) / 2);
        let y = 1 + 2 * self.rng.random_range(0..(height - 1) / 2);
        Point::new(x, y)
    }
}

/// Convert a single interior `Wall` cell back to `Open`.
///
/// This is the one mutation a grid supports after generation (the "break a
/// wall" move next to an entity; cost and cooldown are gameplay concerns the
/// caller owns). Breaking a border cell, or a cell outside the arena
/// entirely, fails with [`MazeError::ImmutableBorder`] and leaves the grid
/// untouched. Breaking an already-open cell is a no-op.
pub fn break_wall(grid: &mut Grid, p: Point) -> Result<(), MazeError> {
    if !grid.contains(p) || grid.is_border(p) {
        return Err(MazeError::ImmutableBorder(p));
    }
    grid.set(p, Tile::Open);
    Ok(())
}

/// Whether `p` lies strictly inside the border ring.
#[inline]
fn interior(p: Point, width: i32, height: i32) -> bool {
    p.x >= 1 && p.x < width - 1 && p.y >= 1 && p.y < height - 1
}

/// Force the outer ring to `Wall`.
fn seal_border(grid: &mut Grid) {
    let (w, h) = (grid.width(), grid.height());
    for x in 0..w {
        grid.set(Point::new(x, 0), Tile::Wall);
        grid.set(Point::new(x, h - 1), Tile::Wall);
    }
    for y in 0..h {
        grid.set(Point::new(0, y), Tile::Wall);
        grid.set(Point::new(w - 1, y), Tile::Wall);
    }
}

/// Errors from maze generation and the wall-break mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// Requested arena is too small to hold any interior.
    InvalidDimensions { width: i32, height: i32 },
    /// Wall break requested on the border ring (or outside the arena).
    ImmutableBorder(Point),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "maze dimensions {width}x{height} are below the 3x3 minimum")
            }
            Self::ImmutableBorder(p) => {
                write!(f, "cannot break border wall at {p}")
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use gridhunt_paths::{GridPather, Planner};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn carve(seed: u64, width: i32, height: i32) -> Grid {
        let mut builder = MazeBuilder::new(StdRng::seed_from_u64(seed));
        builder.carve(width, height).unwrap()
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let mut builder = MazeBuilder::new(StdRng::seed_from_u64(0));
        assert_eq!(
            builder.carve(2, 9),
            Err(MazeError::InvalidDimensions { width: 2, height: 9 })
        );
        assert_eq!(
            builder.carve(9, 0),
            Err(MazeError::InvalidDimensions { width: 9, height: 0 })
        );
        assert!(builder.carve(3, 3).is_ok());
    }

    #[test]
    fn border_ring_is_solid_wall() {
        for seed in 0..5 {
            let grid = carve(seed, 17, 11);
            for (p, tile) in grid.iter() {
                if grid.is_border(p) {
                    assert_eq!(tile, Tile::Wall, "border cell {p} is not wall");
                }
            }
        }
    }

    #[test]
    fn carved_cells_sit_on_the_odd_lattice_or_between() {
        // Corridor cells have at least one odd coordinate: even-even cells
        // are lattice "pillars" and must stay wall.
        let grid = carve(42, 21, 15);
        for (p, tile) in grid.iter() {
            if p.x % 2 == 0 && p.y % 2 == 0 {
                assert_eq!(tile, Tile::Wall, "pillar cell {p} was carved");
            }
        }
    }

    #[test]
    fn every_open_cell_is_reachable_from_every_other() {
        for (seed, w, h) in [(1u64, 5, 5), (2, 15, 11), (3, 31, 21), (4, 8, 6)] {
            let grid = carve(seed, w, h);
            let open = grid.open_cells();
            assert!(!open.is_empty());

            let mut planner = Planner::new(w, h);
            let region = planner.flood_fill(&GridPather::new(&grid), open[0]);
            assert_eq!(
                region.len(),
                open.len(),
                "seed {seed}: flood fill reached {} of {} open cells",
                region.len(),
                open.len()
            );
        }
    }

    #[test]
    fn identical_seeds_carve_identical_mazes() {
        let a = carve(7, 19, 13);
        let b = carve(7, 19, 13);
        assert_eq!(a, b);
        let c = carve(8, 19, 13);
        assert_ne!(a, c);
    }

    #[test]
    fn break_wall_opens_an_interior_cell() {
        let mut grid = Grid::new(5, 5);
        assert_eq!(grid.at(Point::new(2, 2)), Some(Tile::Wall));
        break_wall(&mut grid, Point::new(2, 2)).unwrap();
        assert!(grid.is_open(Point::new(2, 2)));
        // Breaking an already-open cell changes nothing.
        break_wall(&mut grid, Point::new(2, 2)).unwrap();
        assert!(grid.is_open(Point::new(2, 2)));
    }

    #[test]
    fn break_wall_refuses_the_border() {
        let mut grid = carve(11, 9, 9);
        let before = grid.clone();
        assert_eq!(
            break_wall(&mut grid, Point::new(0, 4)),
            Err(MazeError::ImmutableBorder(Point::new(0, 4)))
        );
        assert_eq!(
            break_wall(&mut grid, Point::new(8, 8)),
            Err(MazeError::ImmutableBorder(Point::new(8, 8)))
        );
        assert_eq!(
            break_wall(&mut grid, Point::new(9, 2)),
            Err(MazeError::ImmutableBorder(Point::new(9, 2)))
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn broken_wall_opens_a_shortcut() {
        // 5x5 arena: a wall column at x=2 split by the break. Before the
        // break the only route is around; afterwards the planner may cut
        // straight through (2,2).
        let mut grid = Grid::new(5, 5);
        for p in [
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(1, 3),
            Point::new(3, 1),
            Point::new(3, 2),
            Point::new(3, 3),
            Point::new(2, 3),
        ] {
            grid.set(p, Tile::Open);
        }

        let mut planner = Planner::new(5, 5);
        let from = Point::new(1, 2);
        let to = Point::new(3, 2);
        let long = planner.plan(&GridPather::new(&grid), from, to).unwrap();
        assert_eq!(long.len(), 4);

        break_wall(&mut grid, Point::new(2, 2)).unwrap();
        let short = planner.plan(&GridPather::new(&grid), from, to).unwrap();
        assert_eq!(short, vec![Point::new(2, 2), Point::new(3, 2)]);
    }
}
