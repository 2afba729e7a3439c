//! Planned path output type.

use std::time::SystemTime;

use super::Pose;

/// An ordered sequence of poses from the navigation start to the
/// (possibly tolerance-relaxed) goal, stamped with the frame it was
/// planned in and the time it was produced.
///
/// An empty pose sequence signals that planning failed.
#[derive(Clone, Debug)]
pub struct PlannedPath {
    /// World frame the poses are expressed in
    pub frame_id: String,
    /// Time the plan was produced
    pub stamp: SystemTime,
    /// Path poses, start first
    pub poses: Vec<Pose>,
}

impl PlannedPath {
    /// Create an empty path in the given frame, stamped now.
    pub fn new(frame_id: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
            stamp: SystemTime::now(),
            poses: Vec::new(),
        }
    }

    /// Number of poses in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// True if the path holds no poses (planning failed).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}
