//! Occupancy-grid view of a layer.
//!
//! Occupancy grids are stored the other way round from [`GridMap`]: row-major
//! with x along the width, starting at the cell with the smallest x and y.

use glam::DVec2;

use crate::error::{Error, Result};

use super::{GridMap, convert::validate_range};

/// Value for cells with no data.
pub const UNKNOWN: i8 = -1;

/// Largest occupancy value.
pub const OCCUPIED: i8 = 100;

/// 2D occupancy grid with values in `0..=100` and [`UNKNOWN`] for NaN cells.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    /// Frame of the source grid
    pub frame_id: String,
    /// Meters per cell
    pub resolution: f64,
    /// Cells along x
    pub width: usize,
    /// Cells along y
    pub height: usize,
    /// World position of the lower-left corner of cell (0, 0)
    pub origin: DVec2,
    /// Row-major, `data[y * width + x]`
    pub data: Vec<i8>,
}

impl OccupancyGrid {
    /// Cell value at occupancy coordinates, x first.
    pub fn get(&self, x: usize, y: usize) -> Option<i8> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }
}

/// Convert a layer to an occupancy grid, mapping `[min, max]` onto `0..=100`.
///
/// # Errors
/// Fails if the layer does not exist or the range is empty.
pub fn to_occupancy_grid(grid: &GridMap, layer: &str, min: f32, max: f32) -> Result<OccupancyGrid> {
    validate_range(min, max)?;
    let data = grid
        .layer(layer)
        .ok_or_else(|| Error::LayerNotFound(layer.to_string()))?;

    let (width, height) = (grid.rows(), grid.cols());
    let mut occupancy = vec![UNKNOWN; width * height];

    for index in grid.indices() {
        let value = data[grid.linear_index(index)];
        let x = width - 1 - index.row;
        let y = height - 1 - index.col;
        occupancy[y * width + x] = occupancy_value(value, min, max);
    }

    Ok(OccupancyGrid {
        frame_id: grid.frame_id().to_string(),
        resolution: grid.resolution(),
        width,
        height,
        origin: grid.position() - grid.length() / 2.0,
        data: occupancy,
    })
}

fn occupancy_value(value: f32, min: f32, max: f32) -> i8 {
    if value.is_nan() {
        return UNKNOWN;
    }
    let scaled = (value.clamp(min, max) - min) / (max - min) * OCCUPIED as f32;
    scaled.round() as i8
}
