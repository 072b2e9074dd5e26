//! Deterministic course generation
//!
//! Everything that decides the shape of a course lives here. This module must
//! be pure and deterministic:
//! - Seeded RNG only, injected by the caller
//! - Stable iteration order (row-major over the grid)
//! - No rendering or platform dependencies

pub mod carve;
pub mod generator;
pub mod grid;
pub mod project;
pub mod search;

pub use carve::{CarveOutcome, CarveStats, Carver};
pub use generator::{Course, PathGenerator};
pub use grid::{BorderSide, Cell, CellState, Grid};
pub use project::{project_steps, tile_positions};
pub use search::{find_path, is_connected};
