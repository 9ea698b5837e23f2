use maze_core::{Extent, GridGraph, Point};

use crate::distance::manhattan;

/// Minimal pathfinding interface: bounds and neighbor enumeration.
pub trait Pather {
    /// The rectangle every searched point lies in. Per-search arrays are
    /// sized and indexed by it.
    fn extent(&self) -> Extent;

    /// Append the traversable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether a path may pass through `p`. Searches return no path when
    /// either endpoint fails this.
    fn is_passable(&self, p: Point) -> bool;
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f32;
}

/// Pather with a heuristic, for A* and greedy best-first search.
pub trait AstarPather: WeightedPather {
    /// Estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> f32;
}

impl Pather for GridGraph {
    fn extent(&self) -> Extent {
        GridGraph::extent(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(GridGraph::neighbors(self, p));
    }

    fn is_passable(&self, p: Point) -> bool {
        GridGraph::is_passable(self, p)
    }
}

impl WeightedPather for GridGraph {
    fn cost(&self, from: Point, to: Point) -> f32 {
        self.edge_cost(from, to)
    }
}

impl AstarPather for GridGraph {
    /// Manhattan distance. Admissible because no edge costs less than 1.0.
    fn estimate(&self, from: Point, to: Point) -> f32 {
        manhattan(from, to) as f32
    }
}
