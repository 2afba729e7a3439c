//! Robot pose representation.
//!
//! Planning only consumes the planar position; the orientation is carried
//! through unchanged so the caller's goal heading survives into the final
//! pose of a plan.

use serde::{Deserialize, Serialize};

use super::WorldPoint;

/// Orientation as a unit quaternion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W (scalar) component
    pub w: f32,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Position in 3D world coordinates (meters).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    /// X position in meters
    pub x: f32,
    /// Y position in meters
    pub y: f32,
    /// Z position in meters
    pub z: f32,
}

impl Point3 {
    /// Create a new 3D point.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A world-frame pose: 3D position plus orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in meters
    pub position: Point3,
    /// Orientation as a unit quaternion
    pub orientation: Quaternion,
}

impl Pose {
    /// Create a pose at a planar position with zero z and identity orientation.
    pub fn from_xy(x: f32, y: f32) -> Self {
        Self {
            position: Point3::new(x, y, 0.0),
            orientation: Quaternion::IDENTITY,
        }
    }

    /// Create a pose from a world point with zero z and identity orientation.
    pub fn from_point(point: WorldPoint) -> Self {
        Self::from_xy(point.x, point.y)
    }

    /// Planar projection of the position.
    #[inline]
    pub fn point(&self) -> WorldPoint {
        WorldPoint::new(self.position.x, self.position.y)
    }
}
