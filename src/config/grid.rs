//! Grid geometry section.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::GridMap;

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Cell resolution (meters)
    #[serde(default = "defaults::resolution")]
    pub resolution: f64,

    /// Extent along x (meters)
    #[serde(default = "defaults::length_x")]
    pub length_x: f64,

    /// Extent along y (meters)
    #[serde(default = "defaults::length_y")]
    pub length_y: f64,

    /// Grid centre x in the grid frame (meters)
    #[serde(default = "defaults::position_x")]
    pub position_x: f64,

    /// Grid centre y in the grid frame (meters)
    #[serde(default)]
    pub position_y: f64,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            length_x: defaults::length_x(),
            length_y: defaults::length_y(),
            position_x: defaults::position_x(),
            position_y: 0.0,
        }
    }
}

impl GridSection {
    /// Side lengths as a vector.
    pub fn length(&self) -> DVec2 {
        DVec2::new(self.length_x, self.length_y)
    }

    /// Centre as a vector.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.position_x, self.position_y)
    }

    /// Build an empty grid in `frame_id`.
    pub fn to_grid_map(&self, frame_id: &str) -> Result<GridMap> {
        Ok(GridMap::new(self.length(), self.resolution, self.position())?.with_frame_id(frame_id))
    }

    pub(super) fn validate(&self) -> Result<()> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(Error::Config(format!(
                "grid.resolution must be positive, got {}",
                self.resolution
            )));
        }
        if !(self.length_x > 0.0 && self.length_y > 0.0) {
            return Err(Error::Config(format!(
                "grid length must be positive, got ({}, {})",
                self.length_x, self.length_y
            )));
        }
        Ok(())
    }
}
