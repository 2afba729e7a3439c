//! Final-approach smoothing.

use crate::core::{PlannedPath, Pose};

/// Fix up the path's approach so it terminates at the requested goal pose.
///
/// If the extracted last pose sits farther from the second-to-last pose than
/// the goal does, the last pose overshoots the natural approach and is
/// replaced by the goal; otherwise the goal is appended as one extra pose.
/// Paths shorter than two poses just get the goal appended.
pub(crate) fn smooth_approach_to_goal(goal: &Pose, path: &mut PlannedPath) {
    let n = path.poses.len();
    if n < 2 {
        path.poses.push(*goal);
        return;
    }

    let last = path.poses[n - 1].point();
    let second_to_last = path.poses[n - 2].point();
    let goal_point = goal.point();

    if last.squared_distance(&second_to_last) > goal_point.squared_distance(&second_to_last) {
        path.poses[n - 1] = *goal;
    } else {
        path.poses.push(*goal);
    }
}
