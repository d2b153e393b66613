//! Maze generation for gridhunt arenas.
//!
//! [`MazeBuilder`] carves a fully-connected maze into a solid grid using a
//! randomized depth-first walk over an odd-parity lattice, and
//! [`break_wall`] is the single runtime mutation a level supports after
//! generation.

pub mod builder;

pub use builder::{MazeBuilder, MazeError, break_wall};
