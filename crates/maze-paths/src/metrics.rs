//! Measurements over finished paths.

use std::collections::HashSet;

use maze_core::Point;

use crate::traits::{Pather, WeightedPather};

/// Total edge cost of walking `path` in order. Zero for paths with fewer
/// than two cells.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[Point]) -> f32 {
    path.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
}

/// Whether `path` is a walkable route from `from` to `to`: it starts and
/// ends there, every cell is passable, every step goes to a neighbor the
/// pather reports, and no cell appears twice.
///
/// The empty path is never valid; check for "no path" separately.
pub fn is_valid_path<P: Pather>(pather: &P, path: &[Point], from: Point, to: Point) -> bool {
    if path.first() != Some(&from) || path.last() != Some(&to) {
        return false;
    }
    if !path.iter().all(|&p| pather.is_passable(p)) {
        return false;
    }
    let mut nbuf = Vec::with_capacity(4);
    for w in path.windows(2) {
        nbuf.clear();
        pather.neighbors(w[0], &mut nbuf);
        if !nbuf.contains(&w[1]) {
            return false;
        }
    }
    let unique: HashSet<Point> = path.iter().copied().collect();
    unique.len() == path.len()
}
