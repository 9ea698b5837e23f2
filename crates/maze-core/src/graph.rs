//! The grid graph searched by every strategy.
//!
//! [`GridGraph`] owns a dense, row-major array of [`Cell`]s. Cells are
//! addressed by [`Point`]; nothing outside the graph holds a cell by value
//! for longer than a query. The graph is never mutated after construction,
//! so a single instance can back any number of concurrent searches.

use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::geom::{Extent, Point, Position};
use crate::layout::Layout;
use crate::terrain::Terrain;

/// A single vertex of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Grid coordinates.
    pub pos: Point,
    /// Spatial center of the cell.
    pub position: Position,
    /// Terrain classification.
    pub terrain: Terrain,
}

/// A 4-connected `width × depth` grid with static terrain.
#[derive(Debug, Clone)]
pub struct GridGraph {
    extent: Extent,
    config: GraphConfig,
    /// Spatial position of cell (0, 0).
    zero: Position,
    cells: Vec<Cell>,
}

impl GridGraph {
    /// Build a graph from a row-major terrain array (`z * width + x`).
    pub fn new(
        width: i32,
        depth: i32,
        terrain: Vec<Terrain>,
        config: GraphConfig,
    ) -> Result<Self, GraphError> {
        config.validate()?;
        let extent = Extent::new(width.max(0), depth.max(0));
        if terrain.len() != extent.len() {
            return Err(GraphError::SizeMismatch {
                expected: extent.len(),
                actual: terrain.len(),
            });
        }

        // The grid is centered on the spatial origin.
        let s = config.cell_size;
        let zero = Position::new(
            -(extent.width as f32) * s / 2.0 + s / 2.0,
            0.0,
            -(extent.depth as f32) * s / 2.0 + s / 2.0,
        );

        let cells = extent
            .iter()
            .zip(terrain)
            .map(|(pos, terrain)| Cell {
                pos,
                position: zero + Position::new(pos.x as f32 * s, 0.0, pos.z as f32 * s),
                terrain,
            })
            .collect();

        log::debug!(
            "built {extent} grid graph (swamp cost {}, cell size {s})",
            config.swamp_cost
        );

        Ok(Self {
            extent,
            config,
            zero,
            cells,
        })
    }

    /// Build an obstacle-free graph.
    pub fn open(width: i32, depth: i32, config: GraphConfig) -> Result<Self, GraphError> {
        let len = Extent::new(width, depth).len();
        Self::new(width, depth, vec![Terrain::Floor; len], config)
    }

    /// Build a graph from a parsed text layout.
    pub fn from_layout(layout: &Layout, config: GraphConfig) -> Result<Self, GraphError> {
        let e = layout.extent();
        Self::new(e.width, e.depth, layout.terrain().to_vec(), config)
    }

    /// Size along `x`.
    #[inline]
    pub fn width(&self) -> i32 {
        self.extent.width
    }

    /// Size along `z`.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.extent.depth
    }

    /// The `width × depth` rectangle covered by the graph.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The configuration the graph was built with.
    #[inline]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the graph has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.extent.index(p).map(|i| &self.cells[i])
    }

    /// Get the cell at `(x, z)`.
    pub fn cell_at(&self, x: i32, z: i32) -> Result<&Cell, GraphError> {
        self.cell(Point::new(x, z)).ok_or(GraphError::OutOfRange {
            x,
            z,
            width: self.extent.width,
            depth: self.extent.depth,
        })
    }

    /// The cell nearest to a spatial position, clamped to the grid bounds.
    ///
    /// Only the `x` and `z` components are used.
    pub fn resolve(&self, position: Position) -> Result<&Cell, GraphError> {
        if !position.is_finite() {
            return Err(GraphError::InvalidPosition);
        }
        if self.is_empty() {
            return Err(GraphError::EmptyGrid);
        }
        let rel = position - self.zero;
        let s = self.config.cell_size;
        // Saturating float-to-int casts keep far-away positions clampable.
        let p = Point::new((rel.x / s).round() as i32, (rel.z / s).round() as i32);
        let p = self.extent.clamp(p);
        Ok(&self.cells[p.z as usize * self.extent.width as usize + p.x as usize])
    }

    /// Spatial position of the cell at `p`.
    #[inline]
    pub fn position_of(&self, p: Point) -> Option<Position> {
        self.cell(p).map(|c| c.position)
    }

    /// Terrain of the cell at `p`.
    #[inline]
    pub fn terrain_at(&self, p: Point) -> Option<Terrain> {
        self.cell(p).map(|c| c.terrain)
    }

    /// Whether `p` is an in-bounds obstacle.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.terrain_at(p) == Some(Terrain::Obstacle)
    }

    /// Whether `p` is an in-bounds swamp.
    #[inline]
    pub fn is_swamp(&self, p: Point) -> bool {
        self.terrain_at(p) == Some(Terrain::Swamp)
    }

    /// Whether `p` is in bounds and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.terrain_at(p).is_some_and(Terrain::is_passable)
    }

    /// In-bounds, non-obstacle cardinal neighbours of `p`, in `+x, -x, +z, -z`
    /// order. Swamp cells are included.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_passable(n))
    }

    /// Cost of stepping from `from` into the adjacent cell `to`.
    ///
    /// Depends only on the terrain of `to`: 1.0 for floor, the swamp
    /// multiplier for swamp. Obstacles and out-of-range cells cost infinity.
    pub fn edge_cost(&self, _from: Point, to: Point) -> f32 {
        match self.terrain_at(to) {
            Some(Terrain::Floor) => 1.0,
            Some(Terrain::Swamp) => self.config.swamp_cost,
            Some(Terrain::Obstacle) | None => f32::INFINITY,
        }
    }
}
