//! Weighted random carving
//!
//! Turns a fully open grid into walls and floor one cell at a time while
//! keeping the start and end cells connected. Each iteration consumes exactly
//! one Open cell, so a run takes at most `size²` iterations.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, CellState, Grid};
use super::search::find_path;
use crate::consts::{OTHER_WEIGHT_FACTOR, PATH_WEIGHT_FACTOR};
use crate::error::{Error, Result};

/// What a single carving iteration did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveOutcome {
    /// An off-path cell became a wall
    Walled(Cell),
    /// A path cell became a wall and the path was recomputed around it
    Rerouted(Cell),
    /// Blocking a path cell would disconnect the course, so it was forced
    Pinned(Cell),
}

impl CarveOutcome {
    pub fn cell(&self) -> Cell {
        match *self {
            CarveOutcome::Walled(c) | CarveOutcome::Rerouted(c) | CarveOutcome::Pinned(c) => c,
        }
    }
}

/// Counters collected over one carving run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarveStats {
    pub iterations: usize,
    /// Cells turned into walls (including rerouting ones)
    pub walls: usize,
    pub reroutes: usize,
    pub pins: usize,
}

/// Carving state: the grid plus the currently privileged path
#[derive(Debug, Clone)]
pub struct Carver {
    grid: Grid,
    start: Cell,
    end: Cell,
    wiggliness: f32,
    /// Ordered end-to-start
    path: Vec<Cell>,
    /// Path membership, indexed like the grid
    on_path: Vec<bool>,
    stats: CarveStats,
}

impl Carver {
    /// Force both endpoints and seed the path with an initial search.
    ///
    /// Fails with `ImpossiblePath` if the endpoints are not connected.
    pub fn start<R: Rng + ?Sized>(
        mut grid: Grid,
        start: Cell,
        end: Cell,
        wiggliness: f32,
        rng: &mut R,
    ) -> Result<Self> {
        grid.set_state(start, CellState::Forced);
        grid.set_state(end, CellState::Forced);

        let path = find_path(&grid, start, end, rng).ok_or(Error::ImpossiblePath { start, end })?;
        let mut carver = Self {
            on_path: vec![false; grid.area()],
            grid,
            start,
            end,
            wiggliness,
            path: Vec::new(),
            stats: CarveStats::default(),
        };
        carver.set_path(path);
        Ok(carver)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn start_cell(&self) -> Cell {
        self.start
    }

    pub fn end_cell(&self) -> Cell {
        self.end
    }

    pub fn stats(&self) -> CarveStats {
        self.stats
    }

    pub fn is_on_path(&self, cell: Cell) -> bool {
        self.on_path[self.grid.index(cell)]
    }

    /// True once no Open cell is left
    pub fn is_finished(&self) -> bool {
        self.grid.count(CellState::Open) == 0
    }

    /// Run one carving iteration. Returns `None` when there is nothing left
    /// to carve.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<CarveOutcome> {
        let open = self.grid.open_cells();
        if open.is_empty() {
            return None;
        }
        let (path_open, other_open): (Vec<Cell>, Vec<Cell>) =
            open.into_iter().partition(|&c| self.is_on_path(c));

        let cell = self.pick(&path_open, &other_open, rng)?;
        self.stats.iterations += 1;
        self.grid.set_state(cell, CellState::Blocked);

        if !self.is_on_path(cell) {
            self.stats.walls += 1;
            log::trace!("wall at {cell}");
            return Some(CarveOutcome::Walled(cell));
        }

        match find_path(&self.grid, self.start, self.end, rng) {
            Some(path) => {
                log::debug!(
                    "path blocked at {cell}, rerouted: {} -> {} cells",
                    self.path.len(),
                    path.len()
                );
                self.set_path(path);
                self.stats.walls += 1;
                self.stats.reroutes += 1;
                Some(CarveOutcome::Rerouted(cell))
            }
            None => {
                log::debug!("{cell} is a cut cell, forcing it");
                self.grid.set_state(cell, CellState::Forced);
                self.stats.pins += 1;
                Some(CarveOutcome::Pinned(cell))
            }
        }
    }

    /// Carve until no Open cell remains
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CarveStats {
        while self.step(rng).is_some() {}
        self.stats
    }

    /// Take the final grid and path
    pub fn into_parts(self) -> (Grid, Vec<Cell>, CarveStats) {
        (self.grid, self.path, self.stats)
    }

    /// Weighted choice between path and off-path cells, then uniform within
    /// the chosen group
    fn pick<R: Rng + ?Sized>(
        &self,
        path_open: &[Cell],
        other_open: &[Cell],
        rng: &mut R,
    ) -> Option<Cell> {
        let path_weight = path_open.len() as f64 * f64::from(self.wiggliness) * PATH_WEIGHT_FACTOR;
        let other_weight = other_open.len() as f64 * OTHER_WEIGHT_FACTOR;
        let total = path_weight + other_weight;

        let from_path = if other_open.is_empty() {
            true
        } else if path_open.is_empty() || total <= 0.0 {
            false
        } else {
            rng.random_range(0.0..total) < path_weight
        };

        let group = if from_path { path_open } else { other_open };
        group.choose(rng).copied()
    }

    fn set_path(&mut self, path: Vec<Cell>) {
        for &c in &self.path {
            let idx = self.grid.index(c);
            self.on_path[idx] = false;
        }
        for &c in &path {
            let idx = self.grid.index(c);
            self.on_path[idx] = true;
        }
        self.path = path;
    }
}
