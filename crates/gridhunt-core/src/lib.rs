//! **gridhunt-core** — shared data model for grid-arena games.
//!
//! This crate provides the foundational types used across the *gridhunt*
//! workspace: the [`Point`] cell coordinate, the [`Tile`] occupancy state,
//! and the row-major occupancy [`Grid`] for one level.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Grid, Tile};
