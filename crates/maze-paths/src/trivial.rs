use maze_core::Point;

use crate::error::PathError;
use crate::search::endpoints;
use crate::traits::Pather;

/// The "no pathfinding" baseline: a straight hop from `from` to `to`.
///
/// Ignores terrain and connectivity entirely; the only check is that both
/// endpoints are inside the pather's extent. Returns `[from]` when the two
/// coincide, like every other strategy.
pub fn trivial_path<P: Pather>(pather: &P, from: Point, to: Point) -> Result<Vec<Point>, PathError> {
    let (start, goal) = endpoints(pather.extent(), from, to)?;
    if start == goal {
        return Ok(vec![from]);
    }
    Ok(vec![from, to])
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{GraphConfig, GridGraph, Layout};

    #[test]
    fn ignores_walls() {
        let layout = Layout::parse("S#D").unwrap();
        let g = GridGraph::from_layout(&layout, GraphConfig::default()).unwrap();
        let (s, d) = (Point::new(0, 0), Point::new(2, 0));
        assert_eq!(trivial_path(&g, s, d).unwrap(), vec![s, d]);
        assert_eq!(trivial_path(&g, s, s).unwrap(), vec![s]);
    }

    #[test]
    fn rejects_out_of_range() {
        let g = GridGraph::open(2, 2, GraphConfig::default()).unwrap();
        assert_eq!(
            trivial_path(&g, Point::new(0, 0), Point::new(5, 0)),
            Err(PathError::OutOfRange(Point::new(5, 0)))
        );
    }
}
