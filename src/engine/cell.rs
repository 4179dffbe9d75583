//! Cell coordinates, neighbor enumeration, and toroidal normalization.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::grid::GridSpec;

/// A cell position on the grid.
///
/// Normalized coordinates lie in `[0, columns) x [0, rows)`; raw neighbor
/// coordinates may be out of range by at most one cell before normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

/// The set of currently-alive cells. Owned by the driver; the step
/// functions only read it and return new sets.
pub type LiveSet = HashSet<Cell>;

/// The 8 compass-direction offsets (Moore neighborhood, center excluded).
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Enumerate the 8 raw (un-normalized) neighbor coordinates of a cell.
#[inline]
pub fn neighbors(cell: Cell) -> [Cell; 8] {
    NEIGHBOR_OFFSETS.map(|(dx, dy)| Cell::new(cell.x + dx, cell.y + dy))
}

/// Wrap a coordinate onto the torus.
///
/// Only valid for coordinates at most one step outside the grid (the range
/// produced by `neighbors`); it is not a general modulo for arbitrarily
/// large offsets.
#[inline]
pub fn normalize(cell: Cell, spec: &GridSpec) -> Cell {
    let x = if cell.x < 0 {
        cell.x + spec.columns()
    } else {
        cell.x
    };
    let y = if cell.y < 0 {
        cell.y + spec.rows()
    } else {
        cell.y
    };

    Cell::new(x % spec.columns(), y % spec.rows())
}

/// Convert an ordered sequence of coordinates into a `LiveSet`.
///
/// Coordinates are assumed already in bounds (no normalization is applied);
/// duplicates collapse harmlessly.
pub fn to_live_set<I>(cells: I) -> LiveSet
where
    I: IntoIterator<Item = Cell>,
{
    cells.into_iter().collect()
}
