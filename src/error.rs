//! Error type for course generation and settings handling

use thiserror::Error;

use crate::generation::Cell;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The initial search on a fresh grid found no route
    #[error("impossible path: no route from {start} to {end}")]
    ImpossiblePath { start: Cell, end: Cell },

    /// Radius 0 leaves a single cell, which is both start and end
    #[error("radius must be at least 1, got {radius}")]
    DegenerateGrid { radius: u32 },

    #[error("wiggliness must be a finite, non-negative number, got {0}")]
    InvalidWiggliness(f32),

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}
