//! Pursuit behavior for gridhunt arenas.
//!
//! [`Pursuer`] is the waypoint-following movement state machine: it owns
//! the most recent route and a cursor into it, advancing one movement step
//! per simulation tick. [`Chaser`] wraps a pursuer together with the
//! fixed-interval replanning cadence: routes are recomputed every N ticks
//! rather than every tick, and a failed replan keeps the previous route.

pub mod chaser;
pub mod pursuer;

pub use chaser::{Chaser, DEFAULT_REPLAN_INTERVAL};
pub use pursuer::{Pursuer, PursuitState};
