//! Random terrain generation for tests, benchmarks and the demo binary.

use rand::Rng;

use crate::geom::Extent;
use crate::terrain::Terrain;

/// Densities used by [`random_terrain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainMix {
    /// Probability of a cell being an obstacle.
    pub obstacle: f64,
    /// Probability of a non-obstacle cell being swamp.
    pub swamp: f64,
}

impl Default for TerrainMix {
    fn default() -> Self {
        Self {
            obstacle: 0.25,
            swamp: 0.15,
        }
    }
}

/// Classify every cell of `extent` at random, row-major.
///
/// Densities are clamped into `[0, 1]`.
pub fn random_terrain(extent: Extent, mix: TerrainMix, rng: &mut impl Rng) -> Vec<Terrain> {
    let obstacle = mix.obstacle.clamp(0.0, 1.0);
    let swamp = mix.swamp.clamp(0.0, 1.0);
    (0..extent.len())
        .map(|_| {
            if rng.random_bool(obstacle) {
                Terrain::Obstacle
            } else if rng.random_bool(swamp) {
                Terrain::Swamp
            } else {
                Terrain::Floor
            }
        })
        .collect()
}
