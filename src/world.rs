//! The simulation driver.
//!
//! `World` owns the authoritative live set and the step counter, and drives
//! the stateless step engine once per tick: compute both halves of the step
//! from one snapshot, merge, increment the counter, and hand the diff to
//! whatever renders it. It also carries the play/pause state machine and
//! the board-editing entry points the engine itself stays free of.

use crate::engine::cell::{to_live_set, Cell, LiveSet};
use crate::engine::grid::GridSpec;
use crate::engine::stepping::step;

/// Whether the simulation is advancing.
///
/// The scheduler that fires periodic ticks lives outside this crate; it is
/// expected to consult [`World::run_state`] and only call
/// [`World::tick`] while running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

/// The changes produced by one tick, for forwarding to a rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickDiff {
    /// Cells that became alive this tick.
    pub added: LiveSet,
    /// Cells that died this tick.
    pub removed: LiveSet,
    /// The step counter after the tick.
    pub step: u64,
}

/// Authoritative simulation state.
pub struct World {
    spec: GridSpec,
    cells: LiveSet,
    step: u64,
    run_state: RunState,
}

impl World {
    /// Create an empty, paused world at step 0.
    pub fn new(spec: GridSpec) -> Self {
        World {
            spec,
            cells: LiveSet::new(),
            step: 0,
            run_state: RunState::Paused,
        }
    }

    /// Replace the board with a seed pattern and reset the step counter.
    ///
    /// Seed coordinates are assumed in bounds, as with
    /// [`to_live_set`](crate::engine::to_live_set).
    pub fn seed<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        self.cells = to_live_set(cells);
        self.step = 0;
    }

    /// Advance one generation.
    ///
    /// Both halves of the step are computed from the same pre-tick snapshot
    /// before any of the result is merged back; `&mut self` guarantees no
    /// new tick can start until the merge has completed.
    pub fn tick(&mut self) -> TickDiff {
        let result = step(&self.cells, &self.spec);

        self.cells.extend(result.born.iter().copied());
        self.cells.retain(|cell| !result.killed.contains(cell));
        self.step += 1;

        TickDiff {
            added: result.born,
            removed: result.killed,
            step: self.step,
        }
    }

    pub fn play(&mut self) {
        self.run_state = RunState::Running;
    }

    pub fn pause(&mut self) {
        self.run_state = RunState::Paused;
    }

    /// Clear the board, reset the counter, and pause.
    pub fn restart(&mut self) {
        self.cells.clear();
        self.step = 0;
        self.run_state = RunState::Paused;
    }

    /// Make a cell alive. Edits are only accepted while paused; returns
    /// whether the edit was applied.
    pub fn set_alive(&mut self, cell: Cell) -> bool {
        if self.run_state == RunState::Running {
            return false;
        }
        self.cells.insert(cell);
        true
    }

    /// Make a cell dead. Edits are only accepted while paused; returns
    /// whether the edit was applied.
    pub fn set_dead(&mut self, cell: Cell) -> bool {
        if self.run_state == RunState::Running {
            return false;
        }
        self.cells.remove(&cell);
        true
    }

    /// Flip a cell's state. Edits are only accepted while paused; returns
    /// whether the edit was applied.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.run_state == RunState::Running {
            return false;
        }
        if !self.cells.insert(cell) {
            self.cells.remove(&cell);
        }
        true
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &LiveSet {
        &self.cells
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_80x40() -> World {
        World::new(GridSpec::new(80, 40).unwrap())
    }

    fn blinker() -> Vec<Cell> {
        vec![Cell::new(9, 10), Cell::new(10, 10), Cell::new(11, 10)]
    }

    #[test]
    fn test_new_world_is_empty_and_paused() {
        let world = world_80x40();

        assert_eq!(world.population(), 0);
        assert_eq!(world.step(), 0);
        assert_eq!(world.run_state(), RunState::Paused);
    }

    #[test]
    fn test_tick_merges_diff_and_counts_steps() {
        let mut world = world_80x40();
        world.seed(blinker());

        let diff = world.tick();

        assert_eq!(diff.step, 1);
        assert_eq!(world.step(), 1);

        // The diff describes exactly the change applied to the world.
        for cell in &diff.added {
            assert!(world.is_alive(*cell));
        }
        for cell in &diff.removed {
            assert!(!world.is_alive(*cell));
        }
        assert!(diff.added.is_disjoint(&diff.removed));
    }

    #[test]
    fn test_blinker_round_trips_after_two_ticks() {
        let mut world = world_80x40();
        world.seed(blinker());

        let initial = world.cells().clone();

        world.tick();
        assert_ne!(world.cells(), &initial);

        world.tick();
        assert_eq!(world.cells(), &initial);
        assert_eq!(world.step(), 2);
    }

    #[test]
    fn test_empty_world_tick_is_a_no_op_diff() {
        let mut world = world_80x40();

        let diff = world.tick();
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert_eq!(diff.step, 1);
    }

    #[test]
    fn test_seed_resets_step_counter() {
        let mut world = world_80x40();
        world.seed(blinker());
        world.tick();
        world.tick();
        assert_eq!(world.step(), 2);

        world.seed(blinker());
        assert_eq!(world.step(), 0);
        assert_eq!(world.population(), 3);
    }

    #[test]
    fn test_restart_clears_and_pauses() {
        let mut world = world_80x40();
        world.seed(blinker());
        world.play();
        world.tick();

        world.restart();

        assert_eq!(world.population(), 0);
        assert_eq!(world.step(), 0);
        assert_eq!(world.run_state(), RunState::Paused);
    }

    #[test]
    fn test_editing_rejected_while_running() {
        let mut world = world_80x40();
        let cell = Cell::new(3, 3);

        world.set_alive(cell);
        world.play();
        assert!(!world.set_dead(cell));
        assert!(world.is_alive(cell));

        world.pause();
        assert!(world.set_dead(cell));
        assert!(!world.is_alive(cell));

        world.play();
        assert!(!world.set_alive(cell));
        assert!(!world.toggle(cell));
        assert!(!world.is_alive(cell));

        world.pause();
        assert!(world.set_alive(cell));
        assert!(world.is_alive(cell));
    }

    #[test]
    fn test_toggle_flips_cell_state() {
        let mut world = world_80x40();
        let cell = Cell::new(4, 4);

        assert!(world.toggle(cell));
        assert!(world.is_alive(cell));

        assert!(world.toggle(cell));
        assert!(!world.is_alive(cell));
    }
}
