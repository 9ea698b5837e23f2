//! Search strategies for grid pathfinding.
//!
//! Five strategies that find a route between two cells of a
//! [`maze_core::GridGraph`], or of anything else that implements the pather
//! traits:
//!
//! - **Trivial** straight hop, ignoring the grid ([`trivial_path`])
//! - **Depth-first** search with backtracking ([`dfs_path`])
//! - **Breadth-first** search, fewest hops ([`bfs_path`])
//! - **Best-first** search, uniform-cost (Dijkstra) or greedy ([`best_first_path`])
//! - **A\*** cheapest-path search ([`astar_path`])
//!
//! [`Strategy`] selects among them by value or by name. Every search returns
//! the cells from source to destination inclusive, `[source]` when the two
//! coincide, and an empty path when the destination cannot be reached.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | trivial, DFS, BFS |
//! | [`WeightedPather`] : [`Pather`] | path costs |
//! | [`AstarPather`] : [`WeightedPather`] | best-first, A* |

mod astar;
mod best_first;
mod bfs;
mod dfs;
mod distance;
mod error;
mod frontier;
mod metrics;
mod predecessors;
mod search;
mod strategy;
mod traits;
mod trivial;

pub use astar::astar_path;
pub use best_first::{BestFirstPolicy, best_first_path};
pub use bfs::bfs_path;
pub use dfs::dfs_path;
pub use distance::manhattan;
pub use error::PathError;
pub use frontier::PriorityQueue;
pub use metrics::{is_valid_path, path_cost};
pub use predecessors::{Predecessors, build_path};
pub use strategy::Strategy;
pub use traits::{AstarPather, Pather, WeightedPather};
pub use trivial::trivial_path;
