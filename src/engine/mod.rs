//! Core step-engine logic.
//!
//! This module contains the actual algorithm: toroidal coordinate handling,
//! neighbor counting, and the per-generation born/kill computation. The
//! engine is stateless; the [`world`](crate::world) driver owns the
//! authoritative live set and calls in once per tick.

pub mod cell;
pub mod grid;
pub mod parallel;
pub mod stepping;

pub use cell::{neighbors, normalize, to_live_set, Cell, LiveSet, NEIGHBOR_OFFSETS};
pub use grid::GridSpec;
pub use parallel::{par_born, par_kill, par_step};
pub use stepping::{born, kill, live_neighbor_count, step, StepResult};
