//! Configuration loading for the way-area rasterizer.
//!
//! Loads everything from a single YAML file; every field has a default, so
//! an empty file (or no file) gives the standard setup.
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Grid extent, resolution, centre |
//! | [`FrameSection`] | Grid/map frame names, strict mode, static transforms |
//! | [`LayerSection`] | One entry per output layer |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   resolution: 0.2       # 20cm cells
//!   length_x: 80.0
//!   length_y: 30.0
//!   position_x: 20.0      # look ahead of the sensor
//! frames:
//!   grid_frame: velodyne
//!   map_frame: map
//!   strict: false
//!   transforms:
//!     - parent: map
//!       child: velodyne
//!       transform:
//!         rotation: [0.0, 0.0, 0.0, 1.0]
//!         translation: [10.0, 5.0, 2.0]
//! layers:
//!   - name: wayarea
//!     mode: classified
//!     background: 255
//!     fill_value: 128
//!   - name: height
//!     mode: height
//!     background: 0
//!     min_value: -10
//!     max_value: 10
//! ```

mod defaults;
mod frames;
mod grid;
mod layers;
mod raster;

pub use frames::FrameSection;
pub use grid::GridSection;
pub use layers::{FillMode, LayerSection};
pub use raster::RasterConfig;
