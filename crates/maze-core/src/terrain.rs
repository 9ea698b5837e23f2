//! Static per-cell terrain classification.

use std::fmt;

/// How a cell can be traversed. Fixed when the graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Terrain {
    /// Normal ground, entered at unit cost.
    #[default]
    Floor,
    /// Passable but slow; entering costs the configured swamp multiplier.
    Swamp,
    /// Impassable.
    Obstacle,
}

impl Terrain {
    /// Whether a path may go through a cell of this terrain.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Obstacle)
    }

    /// Layout character for this terrain.
    pub const fn to_char(self) -> char {
        match self {
            Terrain::Floor => '.',
            Terrain::Swamp => '~',
            Terrain::Obstacle => '#',
        }
    }

    /// Parse a layout character. Marker characters are handled by
    /// [`Layout`](crate::Layout), not here.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Terrain::Floor),
            '~' => Some(Terrain::Swamp),
            '#' => Some(Terrain::Obstacle),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Floor => "floor",
            Terrain::Swamp => "swamp",
            Terrain::Obstacle => "obstacle",
        };
        f.write_str(name)
    }
}
