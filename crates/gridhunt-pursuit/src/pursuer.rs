//! Waypoint-following movement.

use gridhunt_core::Point;

/// Movement state of a pursuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PursuitState {
    /// No route, or the current route is exhausted.
    Idle,
    /// Advancing toward the next waypoint of the current route.
    Following,
}

/// An entity that follows a planned route across the arena.
///
/// Position is continuous, measured in tile units, with the center of cell
/// `(c, r)` at `(c + 0.5, r + 0.5)`. The pursuer owns the most recent
/// route and a cursor into it; a new route replaces the old one wholesale
/// and stale routes are dropped, never merged.
#[derive(Debug, Clone)]
pub struct Pursuer {
    x: f32,
    y: f32,
    speed: f32,
    path: Vec<Point>,
    cursor: usize,
}

impl Pursuer {
    /// Create a pursuer at the center of `cell`, moving `speed` tiles per
    /// tick.
    pub fn new(cell: Point, speed: f32) -> Self {
        let (x, y) = center(cell);
        Self {
            x,
            y,
            speed,
            path: Vec::new(),
            cursor: 0,
        }
    }

    /// Continuous position in tile units.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// The cell currently occupied.
    pub fn cell(&self) -> Point {
        Point::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Movement speed in tiles per tick.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current movement state.
    pub fn state(&self) -> PursuitState {
        if self.cursor < self.path.len() {
            PursuitState::Following
        } else {
            PursuitState::Idle
        }
    }

    /// The remaining waypoints of the current route.
    pub fn remaining(&self) -> &[Point] {
        &self.path[self.cursor.min(self.path.len())..]
    }

    /// Replace the current route. The cursor restarts at the first
    /// waypoint; an empty route leaves the pursuer `Idle`.
    pub fn set_path(&mut self, path: Vec<Point>) {
        self.path = path;
        self.cursor = 0;
    }

    /// Drop the current route and go `Idle`.
    pub fn clear_path(&mut self) {
        self.path.clear();
        self.cursor = 0;
    }

    /// Advance one tick of movement toward the next waypoint.
    ///
    /// If `blocked` reports the next waypoint occupied (another entity
    /// passing through), the step is skipped this tick and retried on the
    /// next one; that is not a failure and does not trigger replanning.
    /// Reaching within one movement step of the waypoint center lands on it
    /// and advances the cursor; exhausting the route returns the pursuer to
    /// `Idle` until the next replan hands it a new one.
    pub fn step(&mut self, blocked: impl Fn(Point) -> bool) {
        let Some(&waypoint) = self.path.get(self.cursor) else {
            return;
        };
        if blocked(waypoint) {
            return;
        }

        let (tx, ty) = center(waypoint);
        let (dx, dy) = (tx - self.x, ty - self.y);
        let dist = (dx * dx + dy * dy).sqrt();

        if dist <= self.speed {
            self.x = tx;
            self.y = ty;
            self.cursor += 1;
            return;
        }

        self.x += dx / dist * self.speed;
        self.y += dy / dist * self.speed;
    }
}

/// Center of a cell in tile units.
#[inline]
fn center(cell: Point) -> (f32, f32) {
    (cell.x as f32 + 0.5, cell.y as f32 + 0.5)
}
