use std::collections::VecDeque;
use std::fmt;

use gridhunt_core::Point;

use crate::traits::Pather;

/// Flat-index sentinel for "no predecessor" (the search start).
const NO_PREV: u32 = u32::MAX;

/// Route planner for a grid arena.
///
/// `Planner` owns all internal search state (visit marks, predecessor
/// links, the BFS queue) so that replanning every few ticks incurs no
/// allocations after the first call. Visit marks are invalidated lazily by
/// a generation counter rather than cleared per call.
pub struct Planner {
    width: usize,
    height: usize,
    /// Visit marks: a cell is visited in the current search iff its entry
    /// equals `generation`.
    visited: Vec<u32>,
    /// Predecessor flat index, meaningful only where `visited` is current.
    prev: Vec<u32>,
    queue: VecDeque<u32>,
    stack: Vec<u32>,
    generation: u32,
    /// Shared scratch buffer for neighbor queries.
    nbuf: Vec<Point>,
}

impl Planner {
    /// Create a planner for a `width` × `height` arena. Non-positive
    /// dimensions yield a planner whose every query reports unreachable.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        let len = width * height;
        Self {
            width,
            height,
            visited: vec![0; len],
            prev: vec![NO_PREV; len],
            queue: VecDeque::new(),
            stack: Vec::new(),
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Adapt the planner to a new arena size.
    ///
    /// If the new size fits within existing capacity the buffers are kept
    /// and only the generation counter advances, so stale marks are
    /// ignored; otherwise the buffers are reallocated.
    pub fn resize(&mut self, width: i32, height: i32) {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        let len = width * height;
        self.width = width;
        self.height = height;

        if len <= self.visited.len() {
            self.bump_generation();
            return;
        }

        self.visited.clear();
        self.visited.resize(len, 0);
        self.prev.clear();
        self.prev.resize(len, NO_PREV);
        self.generation = 0;
    }

    /// Arena size the planner is currently sized for, as (width, height).
    pub fn size(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32)
    }

    /// Compute the shortest-hop route from `from` to `to`.
    ///
    /// The route excludes `from`, includes `to`, and steps between
    /// 4-adjacent cells. Expansion is plain FIFO breadth-first search with
    /// first-visit-wins predecessors, stopping the instant the target is
    /// dequeued, so for a fixed grid and endpoint pair the result is always
    /// the same sequence. `from == to` yields an empty route.
    ///
    /// Fails with [`PlanError::UnreachableEndpoint`] if either endpoint is
    /// not passable (e.g. a wall was just cleared under the target), and
    /// with [`PlanError::NoPath`] if the search space is exhausted. Both
    /// are ordinary results the caller handles by keeping its previous
    /// route; neither is fatal.
    pub fn plan<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, PlanError> {
        let Some(start) = self.idx(from).filter(|_| pather.passable(from)) else {
            return Err(PlanError::UnreachableEndpoint(from));
        };
        let Some(goal) = self.idx(to).filter(|_| pather.passable(to)) else {
            return Err(PlanError::UnreachableEndpoint(to));
        };
        if start == goal {
            return Ok(Vec::new());
        }

        self.bump_generation();
        let cur_gen = self.generation;

        self.queue.clear();
        self.visited[start] = cur_gen;
        self.prev[start] = NO_PREV;
        self.queue.push_back(start as u32);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.queue.pop_front() {
            let ci = ci as usize;
            if ci == goal {
                found = true;
                break;
            }
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] == cur_gen {
                    continue;
                }
                self.visited[ni] = cur_gen;
                self.prev[ni] = ci as u32;
                self.queue.push_back(ni as u32);
            }
        }

        self.nbuf = nbuf;

        if !found {
            return Err(PlanError::NoPath);
        }

        // Walk predecessor links target -> start, then reverse.
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != start {
            path.push(self.point(ci));
            ci = self.prev[ci] as usize;
        }
        path.reverse();
        Ok(path)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Advance the generation counter, lazily invalidating all visit marks.
    #[inline]
    pub(crate) fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Mark a cell visited in the current generation. Returns `false` if it
    /// was already visited.
    #[inline]
    pub(crate) fn mark(&mut self, idx: usize) -> bool {
        if self.visited[idx] == self.generation {
            return false;
        }
        self.visited[idx] = self.generation;
        true
    }

    pub(crate) fn take_stack(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.stack)
    }

    pub(crate) fn put_stack(&mut self, stack: Vec<u32>) {
        self.stack = stack;
    }
}

/// Errors from a single planning call. All are local and recoverable: the
/// caller keeps its last valid route and retries at the next replan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// An endpoint is a wall or outside the arena.
    UnreachableEndpoint(Point),
    /// The endpoints lie in disconnected regions.
    NoPath,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreachableEndpoint(p) => write!(f, "route endpoint {p} is not open"),
            Self::NoPath => write!(f, "no route between endpoints"),
        }
    }
}

impl std::error::Error for PlanError {}
