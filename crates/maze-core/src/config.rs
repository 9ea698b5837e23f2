//! Graph construction parameters.

use crate::error::GraphError;

/// Default cost of entering a swamp cell.
///
/// Matches the 9.0 / 3.0 walking-speed ratio of normal ground to swamp.
pub const DEFAULT_SWAMP_COST: f32 = 3.0;

/// Configuration for a [`GridGraph`](crate::GridGraph).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// Cost of moving into a swamp cell. Moving into floor costs 1.0.
    pub swamp_cost: f32,
    /// Side length of a cell in spatial units.
    pub cell_size: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            swamp_cost: DEFAULT_SWAMP_COST,
            cell_size: 1.0,
        }
    }
}

impl GraphConfig {
    /// Builder-style setter for the swamp multiplier.
    pub fn with_swamp_cost(mut self, swamp_cost: f32) -> Self {
        self.swamp_cost = swamp_cost;
        self
    }

    /// Builder-style setter for the cell size.
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Check the invariants cost-aware searches rely on: swamp costs more
    /// than floor, so every edge costs at least 1.0 and the Manhattan
    /// estimate stays admissible.
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.swamp_cost.is_finite() || self.swamp_cost <= 1.0 {
            return Err(GraphError::InvalidSwampCost(self.swamp_cost));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(GraphError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = GraphConfig::default();
        assert_eq!(cfg.swamp_cost, 3.0);
        assert_eq!(cfg.cell_size, 1.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_cheap_swamp() {
        let cfg = GraphConfig::default().with_swamp_cost(0.5);
        assert_eq!(cfg.validate(), Err(GraphError::InvalidSwampCost(0.5)));
        let cfg = GraphConfig::default().with_swamp_cost(1.0);
        assert_eq!(cfg.validate(), Err(GraphError::InvalidSwampCost(1.0)));
        assert!(GraphConfig::default().with_swamp_cost(1.01).validate().is_ok());
        let cfg = GraphConfig::default().with_swamp_cost(f32::INFINITY);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_cell_size() {
        assert_eq!(
            GraphConfig::default().with_cell_size(0.0).validate(),
            Err(GraphError::InvalidCellSize(0.0))
        );
        assert!(GraphConfig::default().with_cell_size(f32::NAN).validate().is_err());
    }
}
