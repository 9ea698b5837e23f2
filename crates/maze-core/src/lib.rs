//! **maze-core**: grid graph and geometry types for grid pathfinding.
//!
//! This crate provides the graph every search strategy in `maze-paths`
//! runs on: a dense `width × depth` grid of cells with static terrain
//! (floor, swamp, obstacle), 4-connected cardinal adjacency, terrain-based
//! edge costs and a mapping between spatial positions and cells.
//!
//! Terrain comes from outside the graph, either as a precomputed array
//! ([`GridGraph::new`]), a text [`Layout`], or [`mapgen::random_terrain`].

pub mod config;
pub mod error;
pub mod geom;
pub mod graph;
pub mod layout;
pub mod mapgen;
pub mod terrain;

pub use config::GraphConfig;
pub use error::GraphError;
pub use geom::{Extent, Point, Position};
pub use graph::{Cell, GridGraph};
pub use layout::{Layout, render};
pub use terrain::Terrain;
