//! Rigid 3D transforms between named reference frames.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use super::Point3;

/// A rigid body transform (rotation + translation).
///
/// Maps points expressed in a source frame into a target frame:
/// `p_target = rotation * p_source + translation`.
///
/// # Example
///
/// ```
/// use vastu_raster::core::{Point3, RigidTransform};
///
/// let tf = RigidTransform::from_translation(Point3::new(1.0, 2.0, 0.0));
/// let p = tf.apply(Point3::ZERO);
/// assert_eq!(p, Point3::new(1.0, 2.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    /// Rotation as a unit quaternion `[x, y, z, w]`.
    pub rotation: DQuat,
    /// Translation in meters.
    pub translation: DVec3,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// Identity transform (no rotation, no translation).
    pub const fn identity() -> Self {
        Self {
            rotation: DQuat::IDENTITY,
            translation: DVec3::ZERO,
        }
    }

    /// Create a transform from rotation and translation.
    ///
    /// The rotation is normalized so that slightly denormalized quaternions
    /// read from configuration files stay rigid.
    pub fn new(rotation: DQuat, translation: DVec3) -> Self {
        Self {
            rotation: rotation.normalize(),
            translation,
        }
    }

    /// Translation only.
    pub const fn from_translation(translation: DVec3) -> Self {
        Self {
            rotation: DQuat::IDENTITY,
            translation,
        }
    }

    /// Planar transform: rotation about +Z (radians, CCW) followed by translation.
    pub fn from_yaw(yaw: f64, translation: DVec3) -> Self {
        Self {
            rotation: DQuat::from_rotation_z(yaw),
            translation,
        }
    }

    /// Apply the transform to a point.
    #[inline]
    pub fn apply(&self, point: Point3) -> Point3 {
        self.rotation * point + self.translation
    }

    /// Inverse transform (maps target frame back into source frame).
    pub fn inverse(&self) -> Self {
        let inv_rotation = self.rotation.inverse();
        Self {
            rotation: inv_rotation,
            translation: inv_rotation * (-self.translation),
        }
    }

    /// Compose two transforms: the result applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.rotation * other.translation + self.translation,
        }
    }

    /// True if rotation and translation are within `epsilon` of identity.
    pub fn is_identity(&self, epsilon: f64) -> bool {
        // q and -q encode the same rotation
        let rot_diff = (self.rotation - DQuat::IDENTITY)
            .length()
            .min((self.rotation + DQuat::IDENTITY).length());
        rot_diff < epsilon && self.translation.length() < epsilon
    }
}

/// Apply a rigid transform to a single point.
#[inline]
pub fn transform_point(point: Point3, transform: &RigidTransform) -> Point3 {
    transform.apply(point)
}
