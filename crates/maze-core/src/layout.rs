//! Text layouts: a precomputed terrain classification written as ASCII art.
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | floor |
//! | `~` | swamp |
//! | `#` | obstacle |
//! | `S` | floor, marks the source |
//! | `D` | floor, marks the destination |
//!
//! Line `z` of the text is row `z` of the grid; column `x` is the character
//! offset within the line.

use crate::error::GraphError;
use crate::geom::{Extent, Point};
use crate::graph::GridGraph;
use crate::terrain::Terrain;

/// Marker for the search source.
pub const SOURCE_MARK: char = 'S';
/// Marker for the search destination.
pub const DESTINATION_MARK: char = 'D';

/// A parsed text layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    extent: Extent,
    terrain: Vec<Terrain>,
    source: Option<Point>,
    destination: Option<Point>,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, as is
    /// a trailing `'\r'` on each line. Every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, GraphError> {
        let s = s.trim();
        let mut terrain = Vec::with_capacity(s.len());
        let mut source = None;
        let mut destination = None;
        let mut width: Option<usize> = None;
        let mut depth = 0;

        for (z, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut cols = 0;
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, z as i32);
                let t = match ch {
                    SOURCE_MARK => {
                        source = Some(p);
                        Terrain::Floor
                    }
                    DESTINATION_MARK => {
                        destination = Some(p);
                        Terrain::Floor
                    }
                    _ => Terrain::from_char(ch).ok_or(GraphError::InvalidTerrain {
                        ch,
                        x: p.x,
                        z: p.z,
                    })?,
                };
                terrain.push(t);
                cols += 1;
            }
            match width {
                None => width = Some(cols),
                Some(w) if w != cols => {
                    return Err(GraphError::InconsistentRows {
                        row: z,
                        expected: w,
                        actual: cols,
                    });
                }
                Some(_) => {}
            }
            depth += 1;
        }

        Ok(Self {
            extent: Extent::new(width.unwrap_or(0) as i32, depth),
            terrain,
            source,
            destination,
        })
    }

    /// Size of the layout.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Row-major terrain classification.
    pub fn terrain(&self) -> &[Terrain] {
        &self.terrain
    }

    /// Position of the `S` marker, if any. The last one wins.
    pub fn source(&self) -> Option<Point> {
        self.source
    }

    /// Position of the `D` marker, if any. The last one wins.
    pub fn destination(&self) -> Option<Point> {
        self.destination
    }
}

/// Render a graph back to layout text, drawing `mark` over every point of
/// `overlay` that lies inside the graph.
///
/// Rows are separated by `'\n'`, with no trailing newline.
pub fn render(graph: &GridGraph, overlay: &[Point], mark: char) -> String {
    let extent = graph.extent();
    let mut chars: Vec<char> = graph.cells().iter().map(|c| c.terrain.to_char()).collect();
    for &p in overlay {
        if let Some(i) = extent.index(p) {
            chars[i] = mark;
        }
    }

    let mut out = String::with_capacity(chars.len() + extent.depth.max(0) as usize);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % extent.width as usize == 0 {
            out.push('\n');
        }
        out.push(*ch);
    }
    out
}
