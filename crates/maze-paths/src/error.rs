use std::fmt;

use maze_core::Point;

/// Errors returned by path searches.
///
/// Not finding a path is not an error: searches return an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A search endpoint lies outside the pather's extent.
    OutOfRange(Point),
    /// Walking the predecessor map back from the destination did not reach
    /// the source within the number of cells in the grid.
    InvalidPredecessorGraph { steps: usize },
    /// A strategy name that [`Strategy`](crate::Strategy) does not know.
    UnknownStrategy(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::InvalidPredecessorGraph { steps } => write!(
                f,
                "predecessor map does not lead back to the source (gave up after {steps} steps)"
            ),
            Self::UnknownStrategy(name) => write!(f, "unknown search strategy `{name}`"),
        }
    }
}

impl std::error::Error for PathError {}
