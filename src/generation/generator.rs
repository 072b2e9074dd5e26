//! Course generator entry point
//!
//! Builds a fresh grid per request, picks the exit cell on the border, carves
//! the grid and projects the surviving path into tile steps.

use std::fmt;

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::carve::{CarveStats, Carver};
use super::grid::{BorderSide, Cell, CellState, Grid};
use super::project::{project_steps, tile_positions};
use crate::error::{Error, Result};
use crate::settings::GeneratorSettings;

/// Reject parameters no course can be built from
pub(crate) fn check_params(radius: u32, wiggliness: f32) -> Result<()> {
    if radius == 0 {
        return Err(Error::DegenerateGrid { radius });
    }
    if !wiggliness.is_finite() || wiggliness < 0.0 {
        return Err(Error::InvalidWiggliness(wiggliness));
    }
    Ok(())
}

/// A finished course
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub radius: u32,
    pub wiggliness: f32,
    /// Border the course exits through
    pub exit_side: BorderSide,
    /// Always the grid center
    pub start: Cell,
    pub end: Cell,
    /// Ordered end-to-start
    pub path: Vec<Cell>,
    /// Relative tile steps; first entry is the `(0, 0)` anchor
    pub steps: Vec<IVec2>,
    pub stats: CarveStats,
    /// Final wall layout
    #[serde(skip)]
    pub grid: Grid,
}

impl Course {
    /// Number of tiles in the course
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Tile offsets relative to the first tile
    pub fn tile_positions(&self) -> Vec<IVec2> {
        tile_positions(&self.steps)
    }
}

/// `S` start, `E` end, `o` path, `#` wall
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size();
        let mut on_path = vec![false; self.grid.area()];
        for &c in &self.path {
            on_path[self.grid.index(c)] = true;
        }
        for row in 0..size {
            for col in 0..size {
                let cell = Cell::new(row, col);
                let ch = if cell == self.start {
                    'S'
                } else if cell == self.end {
                    'E'
                } else if on_path[self.grid.index(cell)] {
                    'o'
                } else {
                    match self.grid.state(cell) {
                        CellState::Blocked => '#',
                        CellState::Forced => '.',
                        CellState::Open => ' ',
                    }
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Winding-course generator.
///
/// All random choices go through the injected RNG, so a seeded RNG makes
/// generation fully reproducible. Each call to [`generate_path`] starts from a
/// fresh grid and continues the RNG stream, giving independent draws.
///
/// [`generate_path`]: PathGenerator::generate_path
#[derive(Debug, Clone)]
pub struct PathGenerator<R = Pcg32> {
    radius: u32,
    wiggliness: f32,
    rng: R,
}

impl PathGenerator<Pcg32> {
    /// Generator backed by a `Pcg32` seeded with `seed`
    pub fn from_seed(radius: u32, wiggliness: f32, seed: u64) -> Result<Self> {
        Self::new(radius, wiggliness, Pcg32::seed_from_u64(seed))
    }

    /// Generator for the given settings. A missing seed is drawn from the
    /// thread RNG.
    pub fn from_settings(settings: &GeneratorSettings) -> Result<Self> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "Generator: radius={}, wiggliness={}, seed={}",
            settings.radius,
            settings.wiggliness,
            seed
        );
        Self::from_seed(settings.radius, settings.wiggliness, seed)
    }
}

impl<R: Rng> PathGenerator<R> {
    pub fn new(radius: u32, wiggliness: f32, rng: R) -> Result<Self> {
        check_params(radius, wiggliness)?;
        Ok(Self {
            radius,
            wiggliness,
            rng,
        })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn wiggliness(&self) -> f32 {
        self.wiggliness
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.radius as usize * 2 + 1
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Pick a border side uniformly, then a uniform offset along it
    pub fn choose_end(&mut self) -> (BorderSide, Cell) {
        let size = self.size();
        let side = BorderSide::ALL[self.rng.random_range(0..BorderSide::ALL.len())];
        let offset = self.rng.random_range(0..size);
        (side, side.cell(size, offset))
    }

    /// Build a fresh grid, choose the exit and seed the path.
    ///
    /// The returned carver has not carved anything yet; drive it with
    /// [`Carver::step`] using [`rng_mut`](Self::rng_mut) to observe each
    /// iteration.
    pub fn begin(&mut self) -> Result<(BorderSide, Carver)> {
        let grid = Grid::new(self.radius as usize);
        let start = grid.center();
        let (side, end) = self.choose_end();
        let carver = Carver::start(grid, start, end, self.wiggliness, &mut self.rng)?;
        Ok((side, carver))
    }

    /// Generate a complete course
    pub fn generate_course(&mut self) -> Result<Course> {
        let (exit_side, mut carver) = self.begin()?;
        let start = carver.start_cell();
        let end = carver.end_cell();
        carver.run(&mut self.rng);

        let (grid, path, stats) = carver.into_parts();
        let steps = project_steps(&path, grid.size());
        log::info!(
            "Course {:?} exit at {}: {} tiles, {} walls, {} reroutes, {} pinned",
            exit_side,
            end,
            steps.len(),
            stats.walls,
            stats.reroutes,
            stats.pins
        );

        Ok(Course {
            radius: self.radius,
            wiggliness: self.wiggliness,
            exit_side,
            start,
            end,
            path,
            steps,
            stats,
            grid,
        })
    }

    /// Generate a course and return only its relative tile steps
    pub fn generate_path(&mut self) -> Result<Vec<IVec2>> {
        Ok(self.generate_course()?.steps)
    }
}
