//! Helpers shared by the search loops.

use maze_core::{Extent, Point};

use crate::error::PathError;
use crate::traits::Pather;

/// Flat indices of both endpoints, or the first one outside `extent`.
pub(crate) fn endpoints(extent: Extent, from: Point, to: Point) -> Result<(usize, usize), PathError> {
    let start = extent.index(from).ok_or(PathError::OutOfRange(from))?;
    let goal = extent.index(to).ok_or(PathError::OutOfRange(to))?;
    Ok((start, goal))
}

/// Like [`endpoints`], but `Ok(None)` when either endpoint is impassable, in
/// which case there is no path to search for.
pub(crate) fn open_endpoints<P: Pather>(
    pather: &P,
    from: Point,
    to: Point,
) -> Result<Option<(usize, usize)>, PathError> {
    let found = endpoints(pather.extent(), from, to)?;
    if !pather.is_passable(from) || !pather.is_passable(to) {
        log::debug!("{from} -> {to}: endpoint is an obstacle");
        return Ok(None);
    }
    Ok(Some(found))
}

/// Build a graph from a layout with `S` and `D` markers.
#[cfg(test)]
pub(crate) fn parse_graph(text: &str) -> (maze_core::GridGraph, Point, Point) {
    use maze_core::{GraphConfig, GridGraph, Layout};

    let layout = Layout::parse(text).unwrap();
    let g = GridGraph::from_layout(&layout, GraphConfig::default()).unwrap();
    (g, layout.source().unwrap(), layout.destination().unwrap())
}
