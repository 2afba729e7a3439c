//! Gradient-descent path extraction.

use tracing::debug;

use crate::core::GridCoord;

use super::{PotentialField, POT_HIGH};

/// 8-connected neighborhood offsets.
const NEIGHBORS8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

impl PotentialField {
    /// Walk the potential field downhill from the registered start cell.
    ///
    /// Produces the visited cells in descent order, ending at the registered
    /// goal cell. Returns an empty sequence if the start cell has no finite
    /// potential, the walk gets stuck in a local minimum, or the goal is not
    /// reached within `max_steps` (bounds runtime on malformed fields).
    pub fn extract_path(&self, max_steps: usize) -> Vec<GridCoord> {
        if self.potential_at(self.start) >= POT_HIGH {
            debug!(
                "descent start cell ({}, {}) is unreachable",
                self.start.x, self.start.y
            );
            return Vec::new();
        }

        let mut current = self.start;
        let mut path = vec![current];

        for _ in 0..max_steps {
            if current == self.goal {
                return path;
            }

            // Steepest descent: move to the lowest-potential neighbor
            let mut best = current;
            let mut best_potential = self.potential_at(current);
            for (dx, dy) in NEIGHBORS8 {
                let neighbor = GridCoord::new(current.x + dx, current.y + dy);
                let potential = self.potential_at(neighbor);
                if potential < best_potential {
                    best = neighbor;
                    best_potential = potential;
                }
            }

            if best == current {
                debug!(
                    "descent stuck in local minimum at ({}, {})",
                    current.x, current.y
                );
                return Vec::new();
            }

            current = best;
            path.push(current);
        }

        if current == self.goal {
            path
        } else {
            debug!("descent exceeded {} steps without reaching goal", max_steps);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, WorldPoint};
    use crate::costmap::{cost_values, Costmap, GridCostmap};
    use crate::field::PropagationStrategy;

    fn propagated_field(map: &GridCostmap, start: GridCoord, goal: GridCoord) -> PotentialField {
        let mut field = PotentialField::new(map.width(), map.height());
        field.set_cost_grid(map, true);
        field.set_start(start);
        field.set_goal(goal);
        field.propagate(PropagationStrategy::Wavefront);
        field
    }

    #[test]
    fn test_descent_follows_straight_row() {
        let map = GridCostmap::new(10, 10, 1.0, WorldPoint::ZERO);
        let field = propagated_field(&map, GridCoord::new(9, 0), GridCoord::new(0, 0));

        let path = field.extract_path(40);

        assert_eq!(path.len(), 10);
        assert_eq!(path[0], GridCoord::new(9, 0));
        assert_eq!(path[9], GridCoord::new(0, 0));
        assert!(path.iter().all(|c| c.y == 0));
    }

    #[test]
    fn test_descent_fails_when_start_unreachable() {
        let mut map = GridCostmap::new(10, 10, 1.0, WorldPoint::ZERO);
        for y in 0..10 {
            map.set_cost(GridCoord::new(5, y), cost_values::LETHAL_OBSTACLE);
        }
        let field = propagated_field(&map, GridCoord::new(9, 0), GridCoord::new(0, 0));

        assert!(field.extract_path(40).is_empty());
    }

    #[test]
    fn test_descent_respects_step_cap() {
        let map = GridCostmap::new(10, 10, 1.0, WorldPoint::ZERO);
        let field = propagated_field(&map, GridCoord::new(9, 9), GridCoord::new(0, 0));

        // The diagonal walk needs 9 steps, more than the cap allows
        assert!(field.extract_path(4).is_empty());
        assert!(!field.extract_path(40).is_empty());
    }
}
