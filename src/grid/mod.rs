//! Multi-layer grid map and the raster operations used to fill it.
//!
//! ## Grid Layout
//!
//! The grid is centred on `position` and indexed from its top-left corner,
//! which is the corner with the largest x and y:
//!
//! ```text
//!                 +x
//!                  ▲
//!   (0,0) ┌────────┼────────┐
//!         │        │        │   row grows towards −x
//!   +y ◄──┼────────●────────┼   col grows towards −y
//!         │     position    │
//!         └────────┼────────┘ (rows-1, cols-1)
//! ```
//!
//! Every layer shares the same resolution, length and position. Layers are
//! row-major `f32` buffers of `rows × cols` cells.
//!
//! ## Key Components
//!
//! - [`GridMap`]: named layers plus grid geometry
//! - [`Raster`]: intermediate single-channel image with convex scan-fill
//! - [`convert`]: layer ↔ raster export/import (quantized or raw)
//! - [`OccupancyGrid`]: 0..100 occupancy view of a layer for publication

pub mod convert;
mod map;
mod occupancy;
mod raster;

pub use map::{GridIndex, GridIndexIter, GridMap};
pub use occupancy::{OccupancyGrid, to_occupancy_grid};
pub use raster::{PixelCoord, Raster};
