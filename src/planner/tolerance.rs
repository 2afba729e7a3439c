//! Goal tolerance search.

use crate::core::WorldPoint;
use crate::costmap::Costmap;
use crate::field::{PotentialField, POT_HIGH};

/// Find the reachable point nearest to `goal` within `tolerance` meters.
///
/// Scans a square window of side `2 * tolerance` centered on the goal in
/// row-major order, stepping by the grid resolution. A sampled point is
/// feasible iff its cell acquired a potential strictly below [`POT_HIGH`];
/// among feasible points the one with the smallest squared distance to the
/// literal goal wins, first found on ties. With zero tolerance the window
/// degenerates to the goal itself.
///
/// Returns `None` when no sampled point is reachable.
pub(crate) fn find_reachable_goal(
    field: &PotentialField,
    costmap: &dyn Costmap,
    goal: WorldPoint,
    tolerance: f32,
) -> Option<WorldPoint> {
    let resolution = costmap.resolution();
    let mut best = None;
    let mut best_sdist = f32::MAX;

    // Integer step counts so the far edge of the window is sampled exactly
    // instead of drifting with accumulated float steps.
    let steps = (2.0 * tolerance / resolution).round() as i32;
    for iy in 0..=steps {
        let y = goal.y - tolerance + iy as f32 * resolution;
        for ix in 0..=steps {
            let x = goal.x - tolerance + ix as f32 * resolution;
            let sample = WorldPoint::new(x, y);
            let potential = match costmap.world_to_grid(sample) {
                Some(cell) => field.potential_at(cell),
                None => POT_HIGH,
            };
            let sdist = sample.squared_distance(&goal);

            if potential < POT_HIGH && sdist < best_sdist {
                best_sdist = sdist;
                best = Some(sample);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use crate::costmap::{cost_values, GridCostmap};
    use crate::field::PropagationStrategy;

    /// Propagated field for `map` with the potential seeded at (0, 0).
    fn propagated(map: &GridCostmap) -> PotentialField {
        let mut field = PotentialField::new(map.width(), map.height());
        field.set_cost_grid(map, true);
        field.set_start(GridCoord::new(9, 9));
        field.set_goal(GridCoord::new(0, 0));
        field.propagate(PropagationStrategy::Wavefront);
        field
    }

    #[test]
    fn test_zero_tolerance_samples_goal_only() {
        let map = GridCostmap::new(10, 10, 1.0, WorldPoint::ZERO);
        let field = propagated(&map);

        let goal = WorldPoint::new(4.0, 4.0);
        assert_eq!(find_reachable_goal(&field, &map, goal, 0.0), Some(goal));
    }

    #[test]
    fn test_single_feasible_cell_is_found() {
        // Wall in the goal and its full 8-neighborhood plus the next ring,
        // except one opening two cells below the goal
        let mut map = GridCostmap::new(10, 10, 1.0, WorldPoint::ZERO);
        for dy in -2i32..=2 {
            for dx in -2i32..=2 {
                if (dx, dy) == (0, -2) {
                    continue;
                }
                map.set_cost(
                    GridCoord::new(5 + dx, 5 + dy),
                    cost_values::LETHAL_OBSTACLE,
                );
            }
        }
        let field = propagated(&map);

        let goal = WorldPoint::new(5.0, 5.0);
        let found = find_reachable_goal(&field, &map, goal, 2.0);
        assert_eq!(found, Some(WorldPoint::new(5.0, 3.0)));
    }

    #[test]
    fn test_no_feasible_point_within_window() {
        let mut map = GridCostmap::new(10, 10, 1.0, WorldPoint::ZERO);
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                map.set_cost(
                    GridCoord::new(5 + dx, 5 + dy),
                    cost_values::LETHAL_OBSTACLE,
                );
            }
        }
        let field = propagated(&map);

        let goal = WorldPoint::new(5.0, 5.0);
        assert_eq!(find_reachable_goal(&field, &map, goal, 1.0), None);
    }

    #[test]
    fn test_off_grid_samples_are_infeasible() {
        let map = GridCostmap::new(10, 10, 1.0, WorldPoint::ZERO);
        let field = propagated(&map);

        // Window straddles the lower-left corner; only on-grid samples count
        let goal = WorldPoint::new(0.0, 0.0);
        let found = find_reachable_goal(&field, &map, goal, 1.0);
        assert_eq!(found, Some(goal));
    }

    #[test]
    fn test_fine_resolution_window_reaches_far_edge() {
        // 2m x 2m map at 5cm resolution. Every cell of the 0.35m window
        // around the goal is walled off except the far corner, so the search
        // only succeeds if the last row and column are actually sampled.
        let mut map = GridCostmap::new(40, 40, 0.05, WorldPoint::ZERO);
        for y in 13..=27 {
            for x in 13..=27 {
                if (x, y) == (27, 27) {
                    continue;
                }
                map.set_cost(GridCoord::new(x, y), cost_values::LETHAL_OBSTACLE);
            }
        }
        let field = propagated(&map);

        let goal = WorldPoint::new(1.0, 1.0);
        let found =
            find_reachable_goal(&field, &map, goal, 0.35).expect("far corner is reachable");
        assert_eq!(map.world_to_grid(found), Some(GridCoord::new(27, 27)));
    }
}
