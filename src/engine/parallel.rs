//! Rayon-parallel stepping.
//!
//! Each live cell's candidate computation is independent and reads only the
//! immutable pre-step snapshot, so the work parallelizes per live cell.
//! Partial results are merged by set union, which is commutative and
//! idempotent, so worker scheduling order cannot affect the outcome and the
//! parallel functions return exactly what the sequential ones do.

use rayon::prelude::*;

use super::cell::{neighbors, normalize, LiveSet};
use super::grid::GridSpec;
use super::stepping::{live_neighbor_count, StepResult};

/// Parallel equivalent of [`born`](super::stepping::born).
pub fn par_born(live: &LiveSet, spec: &GridSpec) -> LiveSet {
    live.par_iter()
        .fold(LiveSet::new, |mut acc, &cell| {
            for raw in neighbors(cell) {
                let candidate = normalize(raw, spec);

                if live.contains(&candidate) {
                    continue;
                }

                if live_neighbor_count(candidate, live, spec) == 3 {
                    acc.insert(candidate);
                }
            }
            acc
        })
        .reduce(LiveSet::new, merge)
}

/// Parallel equivalent of [`kill`](super::stepping::kill).
pub fn par_kill(live: &LiveSet, spec: &GridSpec) -> LiveSet {
    live.par_iter()
        .fold(LiveSet::new, |mut acc, &cell| {
            let count = live_neighbor_count(cell, live, spec);
            if count != 2 && count != 3 {
                acc.insert(cell);
            }
            acc
        })
        .reduce(LiveSet::new, merge)
}

/// Compute both halves of a step in parallel from one snapshot.
pub fn par_step(live: &LiveSet, spec: &GridSpec) -> StepResult {
    let (born, killed) = rayon::join(|| par_born(live, spec), || par_kill(live, spec));
    StepResult { born, killed }
}

fn merge(mut a: LiveSet, b: LiveSet) -> LiveSet {
    a.extend(b);
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cell::Cell;
    use crate::engine::stepping::{born, kill};

    /// Generate a pseudo-random live set using a simple LCG.
    fn generate_noisy_state(spec: &GridSpec, seed_base: u32, density_mod: u32) -> LiveSet {
        let mut live = LiveSet::new();
        let mut lcg_state = seed_base.wrapping_mul(1103515245).wrapping_add(12345);

        for y in 0..spec.rows() {
            for x in 0..spec.columns() {
                lcg_state = lcg_state.wrapping_mul(1103515245).wrapping_add(12345);
                if (lcg_state >> 16) % density_mod == 0 {
                    live.insert(Cell::new(x, y));
                }
            }
        }

        live
    }

    #[test]
    fn test_par_born_matches_sequential() {
        let spec = GridSpec::new(80, 40).unwrap();

        for seed in [7, 42, 2024] {
            let live = generate_noisy_state(&spec, seed, 4);
            assert_eq!(par_born(&live, &spec), born(&live, &spec));
        }
    }

    #[test]
    fn test_par_kill_matches_sequential() {
        let spec = GridSpec::new(80, 40).unwrap();

        for seed in [7, 42, 2024] {
            let live = generate_noisy_state(&spec, seed, 4);
            assert_eq!(par_kill(&live, &spec), kill(&live, &spec));
        }
    }

    #[test]
    fn test_par_step_on_empty_input() {
        let spec = GridSpec::new(80, 40).unwrap();
        let result = par_step(&LiveSet::new(), &spec);

        assert!(result.born.is_empty());
        assert!(result.killed.is_empty());
    }

    #[test]
    fn test_par_step_deterministic_across_runs() {
        let spec = GridSpec::new(120, 120).unwrap();
        let live = generate_noisy_state(&spec, 99, 3);

        let first = par_step(&live, &spec);
        let second = par_step(&live, &spec);

        assert_eq!(first, second, "not deterministic");
    }
}
