//! Square cell grid and axis-aligned adjacency
//!
//! Cells are stored in a flat row-major arena. A `Cell` is only a coordinate
//! pair, so "is this cell on the path" is an index lookup rather than an
//! identity comparison, and changing a state is visible to every holder of
//! the coordinate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellState {
    /// May still become a wall
    #[default]
    Open,
    /// A wall; not traversable
    Blocked,
    /// Permanently traversable (endpoints and cells whose blocking would
    /// disconnect the course)
    Forced,
}

impl CellState {
    /// Open and Forced cells can be walked through
    #[inline]
    pub fn is_traversable(self) -> bool {
        self != CellState::Blocked
    }
}

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells
    pub fn manhattan(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four grid borders the course can exit through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderSide {
    /// Row `size - 1`
    Bottom,
    /// Column 0
    Left,
    /// Row 0
    Top,
    /// Column `size - 1`
    Right,
}

impl BorderSide {
    /// Draw order used by end-cell selection
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Bottom,
        BorderSide::Left,
        BorderSide::Top,
        BorderSide::Right,
    ];

    /// Cell at `offset` along this side of a grid with the given side length
    pub fn cell(self, size: usize, offset: usize) -> Cell {
        debug_assert!(offset < size);
        match self {
            BorderSide::Bottom => Cell::new(size - 1, offset),
            BorderSide::Left => Cell::new(offset, 0),
            BorderSide::Top => Cell::new(0, offset),
            BorderSide::Right => Cell::new(offset, size - 1),
        }
    }
}

/// Fixed-size square grid of cell states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    states: Vec<CellState>,
}

impl Grid {
    /// Create a fully open grid for the given radius (side `2 * radius + 1`)
    pub fn new(radius: usize) -> Self {
        let size = radius * 2 + 1;
        Self {
            size,
            states: vec![CellState::Open; size * size],
        }
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    #[inline]
    pub fn area(&self) -> usize {
        self.states.len()
    }

    /// The center cell
    pub fn center(&self) -> Cell {
        let r = self.size / 2;
        Cell::new(r, r)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Flat arena index of a cell
    #[inline]
    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "cell {cell} outside grid");
        cell.row * self.size + cell.col
    }

    #[inline]
    pub fn state(&self, cell: Cell) -> CellState {
        self.states[self.index(cell)]
    }

    pub fn set_state(&mut self, cell: Cell, state: CellState) {
        let idx = self.index(cell);
        self.states[idx] = state;
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        (0..self.states.len()).map(move |i| Cell::new(i / size, i % size))
    }

    /// All cells currently in the Open state, row-major
    pub fn open_cells(&self) -> Vec<Cell> {
        self.cells()
            .filter(|&c| self.state(c) == CellState::Open)
            .collect()
    }

    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// Up to four axis-aligned neighbors that are inside the grid and not
    /// Blocked. Order: up, down, left, right.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut out = Vec::with_capacity(4);
        if cell.row > 0 {
            out.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.row + 1 < self.size {
            out.push(Cell::new(cell.row + 1, cell.col));
        }
        if cell.col > 0 {
            out.push(Cell::new(cell.row, cell.col - 1));
        }
        if cell.col + 1 < self.size {
            out.push(Cell::new(cell.row, cell.col + 1));
        }
        out.retain(|&n| self.state(n).is_traversable());
        out
    }
}

/// `#` wall, `.` forced floor, space for still-open cells
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.state(Cell::new(row, col)) {
                    CellState::Open => ' ',
                    CellState::Blocked => '#',
                    CellState::Forced => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_open() {
        let grid = Grid::new(2);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.area(), 25);
        assert_eq!(grid.count(CellState::Open), 25);
        assert_eq!(grid.center(), Cell::new(2, 2));
    }

    #[test]
    fn test_neighbors_respect_bounds() {
        let grid = Grid::new(1);
        assert_eq!(grid.neighbors(Cell::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbors(Cell::new(0, 1)).len(), 3);
        assert_eq!(grid.neighbors(Cell::new(1, 1)).len(), 4);
        assert_eq!(grid.neighbors(Cell::new(2, 2)).len(), 2);
    }

    #[test]
    fn test_neighbors_skip_blocked_only() {
        let mut grid = Grid::new(1);
        grid.set_state(Cell::new(0, 1), CellState::Blocked);
        grid.set_state(Cell::new(1, 0), CellState::Forced);

        let n = grid.neighbors(Cell::new(1, 1));
        assert_eq!(n.len(), 3);
        assert!(!n.contains(&Cell::new(0, 1)));
        assert!(n.contains(&Cell::new(1, 0)));
    }

    #[test]
    fn test_border_side_cells() {
        assert_eq!(BorderSide::Bottom.cell(5, 3), Cell::new(4, 3));
        assert_eq!(BorderSide::Left.cell(5, 3), Cell::new(3, 0));
        assert_eq!(BorderSide::Top.cell(5, 3), Cell::new(0, 3));
        assert_eq!(BorderSide::Right.cell(5, 3), Cell::new(3, 4));
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(1);
        grid.set_state(Cell::new(0, 0), CellState::Blocked);
        grid.set_state(Cell::new(1, 1), CellState::Forced);
        assert_eq!(grid.to_string(), "#  \n . \n   \n");
    }
}
