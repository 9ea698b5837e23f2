//! The closed set of search strategies behind one entry point.

use std::fmt;
use std::str::FromStr;

use maze_core::Point;

use crate::astar::astar_path;
use crate::best_first::{BestFirstPolicy, best_first_path};
use crate::bfs::bfs_path;
use crate::dfs::dfs_path;
use crate::error::PathError;
use crate::traits::AstarPather;
use crate::trivial::trivial_path;

/// A search strategy.
///
/// | Strategy | Frontier | Optimal |
/// |---|---|---|
/// | `Trivial` | none | no, ignores the grid |
/// | `DepthFirst` | stack | no |
/// | `BreadthFirst` | FIFO queue | fewest hops |
/// | `BestFirst(UniformCost)` | priority queue by cost | yes |
/// | `BestFirst(Greedy)` | priority queue by estimate | no |
/// | `AStar` | priority queue by cost + estimate | yes |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Strategy {
    Trivial,
    DepthFirst,
    BreadthFirst,
    BestFirst(BestFirstPolicy),
    AStar,
}

impl Strategy {
    /// Every strategy, simplest first.
    pub const ALL: [Strategy; 6] = [
        Strategy::Trivial,
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::BestFirst(BestFirstPolicy::UniformCost),
        Strategy::BestFirst(BestFirstPolicy::Greedy),
        Strategy::AStar,
    ];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Trivial => "trivial",
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::BestFirst(BestFirstPolicy::UniformCost) => "dijkstra",
            Strategy::BestFirst(BestFirstPolicy::Greedy) => "greedy",
            Strategy::AStar => "astar",
        }
    }

    /// Whether the strategy always returns a cheapest path when one exists.
    pub const fn is_optimal(self) -> bool {
        matches!(
            self,
            Strategy::BestFirst(BestFirstPolicy::UniformCost) | Strategy::AStar
        )
    }

    /// Find a path from `from` to `to`.
    ///
    /// Returns the cells from `from` to `to` inclusive, `[from]` when they
    /// coincide, or an empty path when `to` cannot be reached. Every strategy
    /// but [`Trivial`](Self::Trivial) treats an obstacle endpoint as
    /// unreachable.
    pub fn find_path<P: AstarPather>(
        self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, PathError> {
        self.find_path_traced(pather, from, to, |_| {})
    }

    /// Like [`find_path`](Self::find_path), calling `visit` with every cell
    /// the search expands, in order. The trivial strategy expands nothing.
    pub fn find_path_traced<P: AstarPather>(
        self,
        pather: &P,
        from: Point,
        to: Point,
        visit: impl FnMut(Point),
    ) -> Result<Vec<Point>, PathError> {
        match self {
            Strategy::Trivial => trivial_path(pather, from, to),
            Strategy::DepthFirst => dfs_path(pather, from, to, visit),
            Strategy::BreadthFirst => bfs_path(pather, from, to, visit),
            Strategy::BestFirst(policy) => best_first_path(pather, from, to, policy, visit),
            Strategy::AStar => astar_path(pather, from, to, visit),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let strategy = match name.as_str() {
            "trivial" | "default" => Strategy::Trivial,
            "dfs" | "depth-first" => Strategy::DepthFirst,
            "bfs" | "breadth-first" => Strategy::BreadthFirst,
            "dijkstra" | "uniform-cost" | "ucs" => Strategy::BestFirst(BestFirstPolicy::UniformCost),
            "greedy" | "greedy-best-first" => Strategy::BestFirst(BestFirstPolicy::Greedy),
            "astar" | "a*" => Strategy::AStar,
            _ => return Err(PathError::UnknownStrategy(s.to_string())),
        };
        Ok(strategy)
    }
}

impl TryFrom<String> for Strategy {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Strategy> for String {
    fn from(s: Strategy) -> Self {
        s.name().to_string()
    }
}
