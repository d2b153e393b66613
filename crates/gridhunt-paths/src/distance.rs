use gridhunt_core::Point;

/// Manhattan (L1) distance between two cells — the grid distance lower
/// bound for 4-directional movement.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
