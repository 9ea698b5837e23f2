//! Per-search predecessor map and path reconstruction.

use maze_core::{Extent, Point};

use crate::error::PathError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Link {
    Unreached,
    Root,
    From(usize),
}

/// Records, for every reached cell, the cell it was reached from.
///
/// Stored as a flat array over the search extent, so links are plain
/// indices. The source is the root and has no predecessor.
#[derive(Clone, Debug)]
pub struct Predecessors {
    extent: Extent,
    links: Vec<Link>,
}

impl Predecessors {
    /// An empty map covering `extent`.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            links: vec![Link::Unreached; extent.len()],
        }
    }

    /// The extent this map covers.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Mark `p` as the search root. Points outside the extent are ignored.
    pub fn set_root(&mut self, p: Point) {
        if let Some(i) = self.extent.index(p) {
            self.links[i] = Link::Root;
        }
    }

    /// Record that `p` was reached from `from`. Overwrites any previous link.
    /// Ignored if either point lies outside the extent.
    pub fn set(&mut self, p: Point, from: Point) {
        if let (Some(i), Some(f)) = (self.extent.index(p), self.extent.index(from)) {
            self.links[i] = Link::From(f);
        }
    }

    /// Whether `p` has been reached.
    pub fn contains(&self, p: Point) -> bool {
        self.extent.index(p).is_some_and(|i| self.reached(i))
    }

    /// The cell `p` was reached from. `None` for the root and for cells not
    /// reached.
    pub fn parent(&self, p: Point) -> Option<Point> {
        match self.links[self.extent.index(p)?] {
            Link::From(f) => Some(self.extent.point(f)),
            Link::Root | Link::Unreached => None,
        }
    }

    // Index-based access for the search loops.

    #[inline]
    pub(crate) fn set_root_index(&mut self, i: usize) {
        self.links[i] = Link::Root;
    }

    #[inline]
    pub(crate) fn set_index(&mut self, i: usize, from: usize) {
        self.links[i] = Link::From(from);
    }

    #[inline]
    pub(crate) fn reached(&self, i: usize) -> bool {
        self.links[i] != Link::Unreached
    }
}

/// Turn a predecessor map into the ordered path from `source` to
/// `destination`, both included.
///
/// Returns an empty path when `destination` was never reached. Fails with
/// [`PathError::InvalidPredecessorGraph`] when the links do not lead back to
/// `source` within `width * depth` steps.
pub fn build_path(
    came_from: &Predecessors,
    source: Point,
    destination: Point,
) -> Result<Vec<Point>, PathError> {
    let extent = came_from.extent;
    let Some(goal) = extent.index(destination) else {
        return Ok(Vec::new());
    };
    if !came_from.reached(goal) {
        return Ok(Vec::new());
    }
    let start = extent.index(source).ok_or(PathError::OutOfRange(source))?;

    let limit = extent.len();
    let mut path = Vec::new();
    let mut ci = goal;
    loop {
        path.push(extent.point(ci));
        if ci == start {
            break;
        }
        let steps = path.len();
        match came_from.links[ci] {
            Link::From(f) if steps < limit => ci = f,
            _ => {
                log::warn!(
                    "malformed predecessor map: no route from {destination} back to {source} after {steps} steps"
                );
                return Err(PathError::InvalidPredecessorGraph { steps });
            }
        }
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(extent: Extent, pts: &[Point]) -> Predecessors {
        let mut m = Predecessors::new(extent);
        m.set_root(pts[0]);
        for w in pts.windows(2) {
            m.set(w[1], w[0]);
        }
        m
    }

    #[test]
    fn rebuilds_source_to_destination() {
        let pts = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(2, 1),
        ];
        let m = chain(Extent::new(3, 2), &pts);
        assert_eq!(build_path(&m, pts[0], pts[3]).unwrap(), pts.to_vec());
        assert_eq!(build_path(&m, pts[0], pts[1]).unwrap(), pts[..2].to_vec());
        assert_eq!(m.parent(pts[2]), Some(pts[1]));
        assert_eq!(m.parent(pts[0]), None);
    }

    #[test]
    fn unreached_destination_is_empty() {
        let m = chain(Extent::new(3, 3), &[Point::new(0, 0), Point::new(1, 0)]);
        assert!(!m.contains(Point::new(2, 2)));
        assert!(build_path(&m, Point::new(0, 0), Point::new(2, 2)).unwrap().is_empty());
        assert!(build_path(&m, Point::new(0, 0), Point::new(9, 9)).unwrap().is_empty());
    }

    #[test]
    fn source_only() {
        let m = chain(Extent::new(2, 2), &[Point::new(1, 1)]);
        assert_eq!(
            build_path(&m, Point::new(1, 1), Point::new(1, 1)).unwrap(),
            vec![Point::new(1, 1)]
        );
    }

    #[test]
    fn cycle_is_detected() {
        let e = Extent::new(2, 2);
        let mut m = Predecessors::new(e);
        m.set_root(Point::new(0, 0));
        m.set(Point::new(1, 0), Point::new(1, 1));
        m.set(Point::new(1, 1), Point::new(1, 0));
        let err = build_path(&m, Point::new(0, 0), Point::new(1, 1)).unwrap_err();
        assert_eq!(err, PathError::InvalidPredecessorGraph { steps: 4 });
    }

    #[test]
    fn foreign_root_is_detected() {
        let e = Extent::new(3, 1);
        let m = chain(e, &[Point::new(2, 0), Point::new(1, 0)]);
        let err = build_path(&m, Point::new(0, 0), Point::new(1, 0)).unwrap_err();
        assert!(matches!(err, PathError::InvalidPredecessorGraph { .. }));
    }

    #[test]
    fn overwriting_a_link() {
        let e = Extent::new(3, 3);
        let mut m = chain(e, &[Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]);
        m.set(Point::new(1, 1), Point::new(0, 1));
        m.set(Point::new(0, 1), Point::new(0, 0));
        assert_eq!(
            build_path(&m, Point::new(0, 0), Point::new(1, 1)).unwrap(),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }
}
