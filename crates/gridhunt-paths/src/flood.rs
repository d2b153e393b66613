//! Flood fill over the passable region.

use gridhunt_core::Point;

use crate::planner::Planner;
use crate::traits::Pather;

impl Planner {
    /// Collect every cell reachable from `start`, including `start` itself.
    ///
    /// Iterative depth-first fill over the same [`Pather`] seam the route
    /// search uses. Returns an empty set if `start` is outside the arena or
    /// not passable. Level bootstrap uses this to partition spawnable floor;
    /// tests use it to check that generated arenas are fully connected.
    pub fn flood_fill<P: Pather>(&mut self, pather: &P, start: Point) -> Vec<Point> {
        let mut region = Vec::new();
        let Some(si) = self.idx(start) else {
            return region;
        };
        if !pather.passable(start) {
            return region;
        }

        self.bump_generation();
        let mut stack = self.take_stack();
        let mut nbuf = Vec::with_capacity(4);

        stack.clear();
        stack.push(si as u32);
        self.mark(si);
        region.push(start);

        while let Some(ci) = stack.pop() {
            let cp = self.point(ci as usize);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.mark(ni) {
                    stack.push(ni as u32);
                    region.push(np);
                }
            }
        }

        self.put_stack(stack);
        region
    }
}
