//! # VastuRaster
//!
//! Rasterize vector-map road areas into robot-centric multi-layer grid maps.
//!
//! ## Overview
//!
//! Drivable road surface is stored in vector maps as a graph of records
//! linked by numeric id:
//!
//! - **Point** - 3D position
//! - **Line** - segment between two points, chained to its neighbours
//! - **Area** - closed boundary, referenced by its first line
//! - **WayArea** - marks an area as drivable
//!
//! VastuRaster walks each way-area boundary back into a polygon, transforms
//! it into the grid frame and scan-fills it into one or more grid layers,
//! either as a constant class value or as the area's height.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_raster::{AreaRasterizer, MapGraph, RasterConfig};
//!
//! let config = RasterConfig::load_or_default("configs/raster.yaml")?;
//! let frames = config.frame_tree();
//! let graph = MapGraph::from_yaml_file("maps/town.yaml")?;
//!
//! let mut rasterizer = AreaRasterizer::new(config)?;
//! let summary = rasterizer.rasterize(&graph, &frames)?;
//! println!("Filled {} layers", summary.layers.len());
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of the sensor)
//! - Y: Left
//! - Z: Up
//!
//! Grid cell `(0, 0)` is the corner with the largest x and y; rows grow
//! towards −x and columns towards −y.

#![warn(missing_docs)]

// Core types
pub mod core;

// Map graph, boundary reconstruction, area collection
pub mod vector_map;

// Frame transforms
pub mod tf;

// Grid storage and raster operations
pub mod grid;

// Polygon fill into layers
pub mod rasterizer;

// Unified configuration
pub mod config;

// Export
pub mod io;

mod error;

// Re-export commonly used types
pub use core::{Point3, Polygon, RigidTransform, transform_point};

pub use error::{Error, Result};

pub use vector_map::{
    Area, BoundaryError, Line, MapGraph, Point, WayArea, collect_areas, reconstruct_boundary,
    search_area_points,
};

pub use tf::{FrameTree, TransformError, TransformResolver, TransformStatus, resolve_transform};

pub use grid::{GridIndex, GridMap, OccupancyGrid, to_occupancy_grid};

pub use rasterizer::{
    AreaRasterizer, ClassifiedFill, FillReport, FrameSelection, HeightFill, RasterSummary,
    fill_classified, fill_heights,
};

pub use config::{FillMode, RasterConfig};
