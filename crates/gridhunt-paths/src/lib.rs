//! Route planning for grid-based pursuit.
//!
//! This crate provides the graph searches the gridhunt workspace runs on an
//! occupancy grid:
//!
//! - **BFS** shortest-hop route planning ([`Planner::plan`])
//! - **Flood fill** connected-region collection ([`Planner::flood_fill`])
//!
//! Both operate through [`Planner`], which owns and reuses its internal
//! buffers so that repeated queries incur no allocations after warm-up, and
//! read passability through the [`Pather`] trait — [`GridPather`] adapts an
//! occupancy [`Grid`](gridhunt_core::Grid).
//!
//! Planning is deterministic: for a fixed grid and endpoint pair the
//! returned route is always identical, because expansion follows the fixed
//! cardinal order of [`Point::CARDINALS`](gridhunt_core::Point::CARDINALS).

mod distance;
mod flood;
mod planner;
mod traits;

pub use distance::manhattan;
pub use planner::{PlanError, Planner};
pub use traits::{GridPather, Pather};
