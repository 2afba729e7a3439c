//! Core geometry types for the planner.
//!
//! ### Coordinates
//! - [`GridCoord`]: Integer cell indices for costmap access
//! - [`WorldPoint`]: Floating-point planar world coordinates in meters
//!
//! ### Poses and paths
//! - [`Pose`]: 3D position plus quaternion orientation
//! - [`PlannedPath`]: Frame- and time-stamped pose sequence

mod path;
mod point;
mod pose;

pub use path::PlannedPath;
pub use point::{GridCoord, WorldPoint};
pub use pose::{Point3, Pose, Quaternion};
