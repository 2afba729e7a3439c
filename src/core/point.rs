//! Coordinate primitives for grid and world frames.

use serde::{Deserialize, Serialize};

/// Integer cell index into a costmap grid.
///
/// A coordinate is valid for a given grid iff
/// `0 <= x < width` and `0 <= y < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate (in cells).
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Euclidean distance to another coordinate (in cells).
    #[inline]
    pub fn euclidean_distance(&self, other: &GridCoord) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Planar world coordinate in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X position in meters
    pub x: f32,
    /// Y position in meters
    pub y: f32,
}

impl WorldPoint {
    /// The world origin (0, 0).
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Create a new world point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point in meters.
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        self.squared_distance(other).sqrt()
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn squared_distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(1, 2);
        let b = GridCoord::new(4, -2);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
    }

    #[test]
    fn test_squared_distance() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert_eq!(a.squared_distance(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
    }
}
