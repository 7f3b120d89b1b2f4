//! Vector map graph: points, lines, areas and way-areas linked by id.
//!
//! Records reference each other through integer ids instead of pointers.
//! Each record kind lives in its own id → record table ([`MapGraph`]), and
//! id `0` is reserved as the "no link" sentinel: it is never stored and never
//! resolves.
//!
//! ```text
//!  WayArea ──aid──► Area ──slid──► Line ──flid──► Line ──flid──► ... (flid = 0)
//!                                   │ bpid/fpid
//!                                   ▼
//!                                 Point
//! ```
//!
//! ## Key Types
//!
//! - [`MapGraph`]: arena of records with [`MapGraph::find_by_key`] and
//!   [`MapGraph::find_by_filter`]
//! - [`reconstruct_boundary`]: walk an area's line chain into a polygon
//! - [`collect_areas`]: reconstruct every way-area in the graph

mod boundary;
mod collector;
mod graph;
mod yaml;

pub use boundary::{BoundaryError, reconstruct_boundary, search_area_points};
pub use collector::{collect_areas, collect_areas_filtered};
pub use graph::{Area, Id, Line, MapGraph, Point, Record, WayArea};
