//! Raster export.
//!
//! - **PGM export**: binary (P5) greyscale image of a quantized layer, one
//!   pixel per grid cell, row 0 at the top (largest x)
//!
//! ```rust,ignore
//! use vastu_raster::io::export_layer_pgm;
//! use std::path::Path;
//!
//! export_layer_pgm(&grid, "wayarea", 0.0, 255.0, Path::new("wayarea.pgm"))?;
//! ```

pub mod pgm;

pub use pgm::{export_layer_pgm, write_pgm};
