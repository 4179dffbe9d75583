//! Toroidal Game of Life engine.
//!
//! The core of a Game of Life visualization: given the live cells on an
//! edge-wrapping grid, compute the cells born and killed at the next
//! generation. The step functions in [`engine`] are pure and stateless;
//! [`world::World`] is the driver that owns the authoritative live set,
//! the step counter, and the play/pause state machine, and [`seeds`]
//! provides named starting patterns.

pub mod engine;
pub mod error;
pub mod seeds;
pub mod world;

pub use engine::{
    born, kill, neighbors, normalize, par_born, par_kill, par_step, step, to_live_set, Cell,
    GridSpec, LiveSet, StepResult,
};
pub use error::{GridError, SeedError};
pub use seeds::NamedSeed;
pub use world::{RunState, TickDiff, World};
