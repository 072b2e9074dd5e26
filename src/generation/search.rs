//! Unweighted shortest-path search over traversable cells

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::grid::{Cell, Grid};

/// Breadth-first search from `start` to `end`.
///
/// Returns the route ordered end-to-start, or `None` when the two cells are
/// not connected through non-Blocked cells. When several predecessors sit at
/// the same distance, one is picked uniformly at random, so the same grid
/// can yield different shortest routes.
pub fn find_path<R: Rng + ?Sized>(
    grid: &Grid,
    start: Cell,
    end: Cell,
    rng: &mut R,
) -> Option<Vec<Cell>> {
    let mut distances: Vec<Option<u32>> = vec![None; grid.area()];
    distances[grid.index(start)] = Some(0);

    let mut frontier = vec![start];
    let mut next = Vec::new();
    let mut depth = 0u32;

    // Expand one full layer at a time
    while distances[grid.index(end)].is_none() {
        if frontier.is_empty() {
            return None;
        }
        for &cell in &frontier {
            for neighbor in grid.neighbors(cell) {
                let slot = &mut distances[grid.index(neighbor)];
                if slot.is_none() {
                    *slot = Some(depth + 1);
                    next.push(neighbor);
                }
            }
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
        depth += 1;
    }

    let mut path = Vec::with_capacity(depth as usize + 1);
    let mut cell = end;
    path.push(cell);
    while depth > 0 {
        let toward_start: Vec<Cell> = grid
            .neighbors(cell)
            .into_iter()
            .filter(|&n| distances[grid.index(n)] == Some(depth - 1))
            .collect();
        // A discovered cell at depth d always has a neighbor at d - 1
        cell = *toward_start.choose(rng)?;
        path.push(cell);
        depth -= 1;
    }
    Some(path)
}

/// Plain reachability check, independent of `find_path` and free of
/// randomness.
pub fn is_connected(grid: &Grid, start: Cell, end: Cell) -> bool {
    if !grid.state(start).is_traversable() || !grid.state(end).is_traversable() {
        return false;
    }
    let mut seen = vec![false; grid.area()];
    let mut queue = VecDeque::from([start]);
    seen[grid.index(start)] = true;

    while let Some(cell) = queue.pop_front() {
        if cell == end {
            return true;
        }
        for n in grid.neighbors(cell) {
            let idx = grid.index(n);
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back(n);
            }
        }
    }
    false
}
