//! Geometry primitives: [`Point`], [`Extent`] and [`Position`].
//!
//! A [`Point`] addresses a cell of the grid by its integer `(x, z)`
//! coordinates. [`Extent`] is the `width × depth` rectangle anchored at the
//! origin and owns the flat-index mapping shared by the graph and every
//! per-search array. [`Position`] is the continuous spatial coordinate a
//! cell is centered on.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell coordinate. `x` grows along the width, `z` along the depth.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub z: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Return a point shifted by (dx, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// The four cardinal neighbours in `+x, -x, +z, -z` order.
    ///
    /// Points outside any particular grid are included; callers clip them.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x + 1, self.z),
            Self::new(self.x - 1, self.z),
            Self::new(self.x, self.z + 1),
            Self::new(self.x, self.z - 1),
        ]
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.z - other.z).abs() == 1
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z.cmp(&other.z).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}

// ---------------------------------------------------------------------------
// Extent
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, width) × [0, depth)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: i32,
    pub depth: i32,
}

impl Extent {
    /// Create a new extent. Negative sizes are treated as empty.
    #[inline]
    pub const fn new(width: i32, depth: i32) -> Self {
        Self { width, depth }
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width as usize) * (self.depth as usize)
    }

    /// Whether the extent has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.depth <= 0
    }

    /// Whether `p` is inside the extent.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.z >= 0 && p.z < self.depth
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if out of
    /// range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.z as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    ///
    /// The index must come from [`index`](Self::index) on the same extent.
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Clamp `p` into the extent. The extent must not be empty.
    #[inline]
    pub fn clamp(self, p: Point) -> Point {
        Point::new(
            p.x.clamp(0, (self.width - 1).max(0)),
            p.z.clamp(0, (self.depth - 1).max(0)),
        )
    }

    /// Row-major iterator over every point in the extent.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        let (w, d) = (self.width.max(0), self.depth.max(0));
        (0..d).flat_map(move |z| (0..w).map(move |x| Point::new(x, z)))
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.depth)
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A continuous spatial coordinate. `y` is the up axis and is ignored by
/// the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Whether every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_4_order() {
        let p = Point::new(3, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(4, 5),
                Point::new(2, 5),
                Point::new(3, 6),
                Point::new(3, 4),
            ]
        );
        for n in p.neighbors_4() {
            assert!(p.is_adjacent(n));
        }
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(4, 6)));
    }

    #[test]
    fn point_ordering_is_row_major() {
        let mut pts = vec![Point::new(2, 1), Point::new(0, 1), Point::new(5, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(5, 0), Point::new(0, 1), Point::new(2, 1)]);
    }

    #[test]
    fn extent_index_round_trip() {
        let e = Extent::new(4, 3);
        assert_eq!(e.len(), 12);
        for (i, p) in e.iter().enumerate() {
            assert_eq!(e.index(p), Some(i));
            assert_eq!(e.point(i), p);
        }
        assert_eq!(e.index(Point::new(4, 0)), None);
        assert_eq!(e.index(Point::new(0, -1)), None);
    }

    #[test]
    fn extent_iter_covers_each_point_once() {
        let e = Extent::new(5, 7);
        let seen: HashSet<Point> = e.iter().collect();
        assert_eq!(seen.len(), e.len());
    }

    #[test]
    fn empty_extent() {
        let e = Extent::new(0, 10);
        assert!(e.is_empty());
        assert_eq!(e.len(), 0);
        assert_eq!(e.iter().count(), 0);
        assert!(!e.contains(Point::ZERO));
        assert!(Extent::new(-3, 2).is_empty());
    }

    #[test]
    fn clamp_into_extent() {
        let e = Extent::new(3, 2);
        assert_eq!(e.clamp(Point::new(-4, 9)), Point::new(0, 1));
        assert_eq!(e.clamp(Point::new(1, 1)), Point::new(1, 1));
        assert_eq!(e.clamp(Point::new(10, -1)), Point::new(2, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1, -2).to_string(), "(1, -2)");
        assert_eq!(Extent::new(3, 4).to_string(), "3x4");
        assert_eq!(Position::new(0.5, 0.0, -1.0).to_string(), "(0.50, 0.00, -1.00)");
    }
}
