//! Core types shared by the reconstruction and rasterization stages.
//!
//! - [`Point3`]: 3D point in map coordinates (meters, double precision)
//! - [`Polygon`]: ordered boundary points of one area
//! - [`RigidTransform`]: rotation + translation between two reference frames
//!
//! Coordinates follow ROS REP-103 (X forward, Y left, Z up).

mod transform;

pub use transform::{RigidTransform, transform_point};

/// 3D point in a map frame (meters).
pub type Point3 = glam::DVec3;

/// Ordered boundary of one area, in line-chain traversal order.
pub type Polygon = Vec<Point3>;
