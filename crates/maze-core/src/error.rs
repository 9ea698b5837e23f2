use std::fmt;

/// Errors raised while building or querying a [`GridGraph`](crate::GridGraph).
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Coordinates outside `[0, width) × [0, depth)`.
    OutOfRange { x: i32, z: i32, width: i32, depth: i32 },
    /// The terrain array does not have `width * depth` entries.
    SizeMismatch { expected: usize, actual: usize },
    /// Swamp multiplier is not finite or is not above 1.0.
    InvalidSwampCost(f32),
    /// Cell size is not finite or not positive.
    InvalidCellSize(f32),
    /// A spatial position with a NaN or infinite component.
    InvalidPosition,
    /// The graph has no cells, so nothing can be resolved.
    EmptyGrid,
    /// A layout row has a different width than the first row.
    InconsistentRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A layout character that is neither terrain nor a marker.
    InvalidTerrain { ch: char, x: i32, z: i32 },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { x, z, width, depth } => {
                write!(f, "cell ({x}, {z}) is outside the {width}x{depth} grid")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "terrain has {actual} cells, expected {expected}")
            }
            Self::InvalidSwampCost(c) => {
                write!(f, "swamp cost must be finite and greater than 1.0, got {c}")
            }
            Self::InvalidCellSize(s) => {
                write!(f, "cell size must be finite and positive, got {s}")
            }
            Self::InvalidPosition => f.write_str("position has a non-finite component"),
            Self::EmptyGrid => f.write_str("grid has no cells"),
            Self::InconsistentRows {
                row,
                expected,
                actual,
            } => write!(
                f,
                "layout row {row} has {actual} columns, expected {expected}"
            ),
            Self::InvalidTerrain { ch, x, z } => {
                write!(f, "layout contains invalid terrain \u{201c}{ch}\u{201d} at ({x}, {z})")
            }
        }
    }
}

impl std::error::Error for GraphError {}
