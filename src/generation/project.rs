//! Cell path to tile step conversion
//!
//! Steps use a Cartesian frame: `x` grows with the column, `y` grows toward
//! the top row (the row axis is flipped).

use glam::IVec2;

use super::grid::Cell;

/// Convert a path into relative steps.
///
/// The first entry is always `(0, 0)`, anchoring the first cell; every later
/// entry is the displacement from the previous cell. The output has the same
/// length and ordering as `path` (end-to-start for generator paths).
pub fn project_steps(path: &[Cell], size: usize) -> Vec<IVec2> {
    let Some(&first) = path.first() else {
        return Vec::new();
    };
    let to_xy = |c: Cell| IVec2::new(c.col as i32, (size - 1 - c.row) as i32);

    let mut last = to_xy(first);
    path.iter()
        .map(|&cell| {
            let pos = to_xy(cell);
            let step = pos - last;
            last = pos;
            step
        })
        .collect()
}

/// Accumulate relative steps into tile offsets measured from the first tile,
/// the way a tile layout consumes them.
pub fn tile_positions(steps: &[IVec2]) -> Vec<IVec2> {
    steps
        .iter()
        .scan(IVec2::ZERO, |pos, &step| {
            *pos += step;
            Some(*pos)
        })
        .collect()
}
