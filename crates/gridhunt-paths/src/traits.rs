use gridhunt_core::{Grid, Point};

/// Passability interface for searches.
///
/// Implementations must enumerate neighbors in a fixed order for a given
/// point, since route determinism depends on it.
pub trait Pather {
    /// Whether `p` can be stood on at all.
    fn passable(&self, p: Point) -> bool;

    /// Append the passable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A [`Pather`] over an occupancy [`Grid`]: open cardinal neighbors, in the
/// fixed right/down/left/up order.
pub struct GridPather<'a> {
    grid: &'a Grid,
}

impl<'a> GridPather<'a> {
    /// Wrap a grid for planning. The grid is only ever read.
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Pather for GridPather<'_> {
    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.grid.is_open(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in Point::CARDINALS {
            let n = p + d;
            if self.grid.is_open(n) {
                buf.push(n);
            }
        }
    }
}
