//! Error types.
//!
//! All fallible surfaces use strongly-typed errors via thiserror. The step
//! functions themselves have no error path: they only accept a validated
//! [`GridSpec`](crate::engine::GridSpec), so the invalid-grid case is
//! rejected at construction and can never reach them.

use thiserror::Error;

/// Grid construction errors.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    InvalidDimensions { columns: i32, rows: i32 },
}

/// Seed pattern loading errors.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}
