//! Generation stepping with the standard B3/S23 rules.
//!
//! B3/S23 on a toroidal grid:
//! - Birth: a dead cell with exactly 3 live neighbors becomes alive
//! - Survival: a live cell with 2 or 3 live neighbors stays alive
//! - Moore neighborhood: 8 neighbors, wrapping at the grid edges
//!
//! Core invariant: `born` and `kill` both read the same immutable pre-step
//! snapshot, never a partially-updated set. The caller merges the two
//! results after both have been computed.

use super::cell::{neighbors, normalize, Cell, LiveSet};
use super::grid::GridSpec;

/// The outcome of one generation step.
///
/// `born` holds only cells that were dead, `killed` only cells that were
/// alive, so the two sets are disjoint by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepResult {
    pub born: LiveSet,
    pub killed: LiveSet,
}

/// Count a cell's live neighbors against the snapshot.
///
/// Each of the 8 offsets is normalized and looked up individually. On grids
/// narrower than 3 cells the wrap can fold an offset back onto the origin
/// cell; that self-fold is skipped so a cell never counts itself. Distinct
/// offsets folding onto the same *other* cell are still counted per offset.
#[inline]
pub fn live_neighbor_count(cell: Cell, live: &LiveSet, spec: &GridSpec) -> u8 {
    let mut count = 0;

    for raw in neighbors(cell) {
        let neighbor = normalize(raw, spec);
        if neighbor == cell {
            continue;
        }
        if live.contains(&neighbor) {
            count += 1;
        }
    }

    count
}

/// Return the dead cells that become alive at the next generation.
///
/// Candidates are the (normalized) neighbors of live cells; a candidate is
/// born when exactly 3 of its own neighbors are alive. A candidate reached
/// through several live cells is only inserted once (set semantics). The
/// result never contains an already-live cell.
pub fn born(live: &LiveSet, spec: &GridSpec) -> LiveSet {
    let mut to_born = LiveSet::new();

    for &cell in live {
        for raw in neighbors(cell) {
            let candidate = normalize(raw, spec);

            // Live cells cannot be born again.
            if live.contains(&candidate) {
                continue;
            }

            if live_neighbor_count(candidate, live, spec) == 3 {
                to_born.insert(candidate);
            }
        }
    }

    to_born
}

/// Return the live cells that die at the next generation.
///
/// A live cell dies on underpopulation (fewer than 2 live neighbors) or
/// overpopulation (more than 3). Counting stops early once the count
/// exceeds 3, since the outcome is then already decided.
pub fn kill(live: &LiveSet, spec: &GridSpec) -> LiveSet {
    let mut to_kill = LiveSet::new();

    for &cell in live {
        let mut count = 0;

        for raw in neighbors(cell) {
            let neighbor = normalize(raw, spec);
            if neighbor == cell {
                continue;
            }
            if live.contains(&neighbor) {
                count += 1;
                if count > 3 {
                    break;
                }
            }
        }

        if count != 2 && count != 3 {
            to_kill.insert(cell);
        }
    }

    to_kill
}

/// Compute both halves of a generation step from one snapshot.
pub fn step(live: &LiveSet, spec: &GridSpec) -> StepResult {
    StepResult {
        born: born(live, spec),
        killed: kill(live, spec),
    }
}
