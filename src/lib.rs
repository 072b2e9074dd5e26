//! Course Carver - procedural winding-course generator
//!
//! Core modules:
//! - `generation`: Deterministic course generation (grid, search, carving, projection)
//! - `settings`: Generator parameters and difficulty presets
//! - `error`: Error type shared by the library and the CLI

pub mod error;
pub mod generation;
pub mod settings;

pub use error::{Error, Result};
pub use generation::{Course, PathGenerator};
pub use settings::{Difficulty, GeneratorSettings};

/// Generator configuration constants
pub mod consts {
    /// Default grid radius (grid side is `2 * radius + 1`)
    pub const DEFAULT_RADIUS: u32 = 4;

    /// Weight multiplier applied to open cells on the current path.
    /// Multiplied again by the wiggliness.
    pub const PATH_WEIGHT_FACTOR: f64 = 2.0;
    /// Weight of every open cell off the current path
    pub const OTHER_WEIGHT_FACTOR: f64 = 1.0;

    /// Largest wiggliness the presets use
    pub const MAX_PRESET_WIGGLINESS: f32 = 10.0;
}
