//! Periodic replanning on top of a [`Pursuer`].

use gridhunt_core::Point;
use gridhunt_paths::{Pather, Planner};
use log::debug;

use crate::pursuer::Pursuer;

/// Default replan cadence in simulation ticks (half a second at 60 ticks
/// per second).
pub const DEFAULT_REPLAN_INTERVAL: u64 = 30;

/// A pursuer plus its replanning schedule.
///
/// Routes are recomputed only every `interval` ticks; between replans the
/// pursuer keeps walking the route it has, even though the target may have
/// moved since. That staleness is a deliberate trade of precision for cheap
/// updates — a route at most one interval old still closes in — so the
/// chaser never replans off-schedule.
#[derive(Debug, Clone)]
pub struct Chaser {
    pursuer: Pursuer,
    interval: u64,
}

impl Chaser {
    /// Create a chaser at `cell` with the default replan interval.
    pub fn new(cell: Point, speed: f32) -> Self {
        Self::with_interval(cell, speed, DEFAULT_REPLAN_INTERVAL)
    }

    /// Create a chaser that replans every `interval` ticks (minimum 1).
    pub fn with_interval(cell: Point, speed: f32, interval: u64) -> Self {
        Self {
            pursuer: Pursuer::new(cell, speed),
            interval: interval.max(1),
        }
    }

    /// The underlying pursuer.
    pub fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    /// Mutable access to the underlying pursuer (spawn repositioning and
    /// similar level glue).
    pub fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    /// Replan cadence in ticks.
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Run one simulation tick: replan if the tick is on the cadence, then
    /// advance one movement step.
    ///
    /// A failed replan — the target stands on a just-cleared wall cell, or
    /// the arena got disconnected — is not an error here: the chaser keeps
    /// following its previous route (or stays idle if it never had one) and
    /// tries again at the next scheduled replan.
    pub fn update<P: Pather>(
        &mut self,
        planner: &mut Planner,
        pather: &P,
        target: Point,
        tick: u64,
        blocked: impl Fn(Point) -> bool,
    ) {
        if tick % self.interval == 0 {
            match planner.plan(pather, self.pursuer.cell(), target) {
                Ok(path) => {
                    debug!(
                        "replanned route to {target}: {} waypoint(s)",
                        path.len()
                    );
                    self.pursuer.set_path(path);
                }
                Err(err) => {
                    debug!("replan to {target} failed ({err}); keeping previous route");
                }
            }
        }
        self.pursuer.step(blocked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pursuer::PursuitState;
    use gridhunt_core::{Grid, Tile};
    use gridhunt_maze::{MazeBuilder, break_wall};
    use gridhunt_paths::GridPather;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const NEVER: fn(Point) -> bool = |_| false;

    fn open_room() -> Grid {
        let mut grid = Grid::new(5, 5);
        for y in 1..4 {
            for x in 1..4 {
                grid.set(Point::new(x, y), Tile::Open);
            }
        }
        grid
    }

    #[test]
    fn replans_only_on_the_cadence() {
        let grid = open_room();
        let mut planner = Planner::new(5, 5);
        let pather = GridPather::new(&grid);
        let mut chaser = Chaser::with_interval(Point::new(1, 1), 0.125, 4);

        chaser.update(&mut planner, &pather, Point::new(3, 1), 0, NEVER);
        assert_eq!(chaser.pursuer().remaining().len(), 2);

        // Ticks 1..3 are off-cadence: the route only shrinks as waypoints
        // are consumed, it is never recomputed.
        for tick in 1..4 {
            chaser.update(&mut planner, &pather, Point::new(1, 3), tick, NEVER);
        }
        let last = chaser.pursuer().remaining().last().copied();
        assert_eq!(last, Some(Point::new(3, 1)));

        // Tick 4 replans toward the new target.
        chaser.update(&mut planner, &pather, Point::new(1, 3), 4, NEVER);
        let last = chaser.pursuer().remaining().last().copied();
        assert_eq!(last, Some(Point::new(1, 3)));
    }

    #[test]
    fn failed_replan_keeps_the_previous_route() {
        let mut grid = open_room();
        let mut planner = Planner::new(5, 5);
        let mut chaser = Chaser::with_interval(Point::new(1, 1), 0.25, 2);

        {
            let pather = GridPather::new(&grid);
            chaser.update(&mut planner, &pather, Point::new(3, 3), 0, NEVER);
        }
        let route_before: Vec<Point> = chaser.pursuer().remaining().to_vec();
        assert!(!route_before.is_empty());

        // The target's cell turns to wall before the next replan tick.
        grid.set(Point::new(3, 3), Tile::Wall);
        let pather = GridPather::new(&grid);
        chaser.update(&mut planner, &pather, Point::new(3, 3), 2, NEVER);

        // Old route retained (minus whatever movement consumed).
        let last = chaser.pursuer().remaining().last().copied();
        assert_eq!(last, route_before.last().copied());
        assert_eq!(chaser.pursuer().state(), PursuitState::Following);
    }

    #[test]
    fn never_routed_chaser_stays_idle_on_failure() {
        let grid = open_room();
        let mut planner = Planner::new(5, 5);
        let pather = GridPather::new(&grid);
        let mut chaser = Chaser::new(Point::new(1, 1), 0.25);

        // Target on a wall from the very first tick.
        chaser.update(&mut planner, &pather, Point::new(0, 0), 0, NEVER);
        assert_eq!(chaser.pursuer().state(), PursuitState::Idle);
        assert_eq!(chaser.pursuer().cell(), Point::new(1, 1));
    }

    #[test]
    fn chases_down_a_stationary_target_through_a_maze() {
        let mut builder = MazeBuilder::new(StdRng::seed_from_u64(9));
        let grid = builder.carve(15, 11).unwrap();
        let open = grid.open_cells();
        let start = open[0];
        let target = *open.last().unwrap();

        let mut planner = Planner::new(15, 11);
        let pather = GridPather::new(&grid);
        let mut chaser = Chaser::with_interval(start, 0.5, 30);

        for tick in 0..2000 {
            chaser.update(&mut planner, &pather, target, tick, NEVER);
            if chaser.pursuer().cell() == target {
                return;
            }
        }
        panic!("chaser never reached {target} from {start}");
    }

    #[test]
    fn reroutes_through_a_broken_wall() {
        let mut grid = open_room();
        grid.set(Point::new(2, 1), Tile::Wall);
        grid.set(Point::new(2, 2), Tile::Wall);
        grid.set(Point::new(2, 3), Tile::Open);

        let mut planner = Planner::new(5, 5);
        let mut chaser = Chaser::with_interval(Point::new(1, 2), 0.25, 2);

        {
            let pather = GridPather::new(&grid);
            chaser.update(&mut planner, &pather, Point::new(3, 2), 0, NEVER);
        }
        // Around the wall column: down, across twice, back up.
        assert_eq!(chaser.pursuer().remaining().len(), 4);

        break_wall(&mut grid, Point::new(2, 2)).unwrap();
        let pather = GridPather::new(&grid);
        chaser.update(&mut planner, &pather, Point::new(3, 2), 2, NEVER);
        // Next replan cut straight through the opened cell.
        assert_eq!(
            chaser.pursuer().remaining(),
            &[Point::new(2, 2), Point::new(3, 2)]
        );
    }
}
