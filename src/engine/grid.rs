//! Validated grid dimensions.

use crate::error::GridError;

/// Immutable per-step grid parameters.
///
/// The fields are private and [`GridSpec::new`] is the only constructor,
/// so a `GridSpec` held by the step functions always has positive
/// dimensions and can never divide by zero. The dimensions never change
/// within a step computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    columns: i32,
    rows: i32,
}

impl GridSpec {
    /// Create a grid spec, rejecting non-positive dimensions.
    pub fn new(columns: i32, rows: i32) -> Result<Self, GridError> {
        if columns <= 0 || rows <= 0 {
            return Err(GridError::InvalidDimensions { columns, rows });
        }

        Ok(GridSpec { columns, rows })
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }
}
