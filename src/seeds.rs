//! Named seed patterns.
//!
//! Seeds are plain lists of coordinate pairs. They can be loaded from JSON
//! files (one array of `{ "x": _, "y": _ }` objects per file), and a small
//! built-in set is bundled as a fallback for when no seed directory is
//! available.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::cell::Cell;
use crate::error::SeedError;

/// A seed pattern with a display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSeed {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl NamedSeed {
    fn new(name: &str, coords: &[(i32, i32)]) -> Self {
        NamedSeed {
            name: name.to_string(),
            cells: coords.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
        }
    }
}

/// All bundled seed patterns.
///
/// One board per category, patterns placed far enough apart (and from the
/// edges of an 80x40 board) not to interfere with each other.
pub fn builtin_seeds() -> Vec<NamedSeed> {
    vec![
        NamedSeed::new(
            "oscillators",
            &[
                // Blinker (period 2)
                (10, 10),
                (11, 10),
                (12, 10),
                // Toad (period 2)
                (21, 10),
                (22, 10),
                (23, 10),
                (20, 11),
                (21, 11),
                (22, 11),
            ],
        ),
        NamedSeed::new(
            "spaceships",
            &[
                // Glider
                (11, 10),
                (12, 11),
                (10, 12),
                (11, 12),
                (12, 12),
            ],
        ),
        NamedSeed::new(
            "still-lives",
            &[
                // Block
                (5, 5),
                (6, 5),
                (5, 6),
                (6, 6),
                // Beehive
                (16, 4),
                (17, 4),
                (15, 5),
                (18, 5),
                (16, 6),
                (17, 6),
            ],
        ),
    ]
}

/// The default starting pattern (first of the built-ins).
pub fn initial_seed() -> NamedSeed {
    builtin_seeds()
        .into_iter()
        .next()
        .expect("builtin seed set is never empty")
}

/// Look up a built-in pattern by name.
pub fn find_builtin(name: &str) -> Option<NamedSeed> {
    builtin_seeds().into_iter().find(|seed| seed.name == name)
}

/// Load one seed pattern from a JSON file.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<Cell>, SeedError> {
    let raw = fs::read_to_string(path)?;
    let cells = serde_json::from_str(&raw)?;
    Ok(cells)
}

/// Load every seed file in a directory, named by file stem.
///
/// Results are sorted by name so the list order does not depend on
/// directory iteration order.
pub fn load_seed_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<NamedSeed>, SeedError> {
    let mut seeds = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let cells = load_seed_file(&path)?;
        seeds.push(NamedSeed { name, cells });
    }

    seeds.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(seeds)
}

/// Load seeds from a directory, falling back to the built-in set when the
/// directory is missing or unreadable.
pub fn load_seed_dir_or_builtin<P: AsRef<Path>>(dir: P) -> Vec<NamedSeed> {
    match load_seed_dir(dir) {
        Ok(seeds) if !seeds.is_empty() => seeds,
        _ => builtin_seeds(),
    }
}
