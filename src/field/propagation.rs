//! Potential propagation strategies.
//!
//! Both strategies seed the potential to zero at the registered goal cell
//! and expand outward over 4-connected neighbors, accumulating the internal
//! traversal cost of each entered cell. The wavefront strategy sweeps every
//! reachable cell; the A* strategy prioritizes expansion toward the start
//! cell and stops as soon as it is settled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{PotentialField, PropagationStrategy, COST_NEUTRAL, COST_OBS, POT_HIGH};

/// Cell queued for expansion, ordered as a min-heap on `priority`.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    idx: usize,
    priority: f32,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower priority value pops first)
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PotentialField {
    /// Compute the potential field between the registered cells.
    ///
    /// Returns whether the registered start cell acquired a finite
    /// potential, i.e. whether it is connected to the goal seed.
    pub fn propagate(&mut self, strategy: PropagationStrategy) -> bool {
        match strategy {
            PropagationStrategy::Wavefront => self.propagate_wavefront(),
            PropagationStrategy::AStar => self.propagate_astar(),
        }
    }

    fn propagate_wavefront(&mut self) -> bool {
        let (Some(seed), Some(target)) = (self.index(self.goal), self.index(self.start)) else {
            return false;
        };

        self.potential.fill(POT_HIGH);
        self.potential[seed] = 0.0;

        let mut open = BinaryHeap::new();
        open.push(QueueEntry {
            idx: seed,
            priority: 0.0,
        });

        while let Some(entry) = open.pop() {
            if entry.priority > self.potential[entry.idx] {
                continue;
            }

            for neighbor in self.neighbors4(entry.idx) {
                if self.costs[neighbor] >= COST_OBS {
                    continue;
                }
                let updated = self.potential[entry.idx] + self.costs[neighbor] as f32;
                if updated < self.potential[neighbor] {
                    self.potential[neighbor] = updated;
                    open.push(QueueEntry {
                        idx: neighbor,
                        priority: updated,
                    });
                }
            }
        }

        self.potential[target] < POT_HIGH
    }

    fn propagate_astar(&mut self) -> bool {
        let (Some(seed), Some(target)) = (self.index(self.goal), self.index(self.start)) else {
            return false;
        };

        self.potential.fill(POT_HIGH);
        self.potential[seed] = 0.0;

        let mut closed = vec![false; self.potential.len()];
        let mut open = BinaryHeap::new();
        open.push(QueueEntry {
            idx: seed,
            priority: self.heuristic(seed, target),
        });

        while let Some(entry) = open.pop() {
            if entry.idx == target {
                return true;
            }
            if closed[entry.idx] {
                continue;
            }
            closed[entry.idx] = true;

            for neighbor in self.neighbors4(entry.idx) {
                if self.costs[neighbor] >= COST_OBS || closed[neighbor] {
                    continue;
                }
                let updated = self.potential[entry.idx] + self.costs[neighbor] as f32;
                if updated < self.potential[neighbor] {
                    self.potential[neighbor] = updated;
                    open.push(QueueEntry {
                        idx: neighbor,
                        priority: updated + self.heuristic(neighbor, target),
                    });
                }
            }
        }

        false
    }

    /// Admissible distance estimate: euclidean cell distance at the
    /// cheapest possible per-cell cost.
    fn heuristic(&self, from: usize, to: usize) -> f32 {
        let dx = (from % self.width) as f32 - (to % self.width) as f32;
        let dy = (from / self.width) as f32 - (to / self.width) as f32;
        (dx * dx + dy * dy).sqrt() * COST_NEUTRAL as f32
    }

    fn neighbors4(&self, idx: usize) -> impl Iterator<Item = usize> {
        let (x, y) = (idx % self.width, idx / self.width);
        let (width, height) = (self.width, self.height);

        [
            (x > 0).then(|| idx - 1),
            (x + 1 < width).then(|| idx + 1),
            (y > 0).then(|| idx - width),
            (y + 1 < height).then(|| idx + width),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, WorldPoint};
    use crate::costmap::{cost_values, Costmap, GridCostmap};

    fn create_open_field() -> PotentialField {
        let map = GridCostmap::new(10, 10, 1.0, WorldPoint::ZERO);
        let mut field = PotentialField::new(10, 10);
        field.set_cost_grid(&map, true);
        field
    }

    #[test]
    fn test_wavefront_reaches_connected_start() {
        let mut field = create_open_field();
        field.set_start(GridCoord::new(9, 9));
        field.set_goal(GridCoord::new(0, 0));

        assert!(field.propagate(PropagationStrategy::Wavefront));

        // Seed has zero potential, everything else is finite and increasing
        assert_eq!(field.potential_at(GridCoord::new(0, 0)), 0.0);
        assert!(field.potential_at(GridCoord::new(9, 9)) < POT_HIGH);
        assert!(
            field.potential_at(GridCoord::new(9, 9)) > field.potential_at(GridCoord::new(5, 5))
        );
    }

    #[test]
    fn test_astar_reaches_connected_start() {
        let mut field = create_open_field();
        field.set_start(GridCoord::new(9, 0));
        field.set_goal(GridCoord::new(0, 0));

        assert!(field.propagate(PropagationStrategy::AStar));
        assert!(field.potential_at(GridCoord::new(9, 0)) < POT_HIGH);
    }

    #[test]
    fn test_propagation_blocked_by_full_wall() {
        let mut map = GridCostmap::new(10, 10, 1.0, WorldPoint::ZERO);
        for y in 0..10 {
            map.set_cost(GridCoord::new(5, y), cost_values::LETHAL_OBSTACLE);
        }

        let mut field = PotentialField::new(10, 10);
        field.set_cost_grid(&map, true);
        field.set_start(GridCoord::new(9, 0));
        field.set_goal(GridCoord::new(0, 0));

        assert!(!field.propagate(PropagationStrategy::Wavefront));
        assert_eq!(field.potential_at(GridCoord::new(9, 0)), POT_HIGH);
        assert!(!field.propagate(PropagationStrategy::AStar));
    }

    #[test]
    fn test_uniform_grid_potential_is_manhattan() {
        let mut field = create_open_field();
        field.set_start(GridCoord::new(9, 9));
        field.set_goal(GridCoord::new(0, 0));
        field.propagate(PropagationStrategy::Wavefront);

        let step = COST_NEUTRAL as f32;
        assert_eq!(field.potential_at(GridCoord::new(3, 0)), 3.0 * step);
        assert_eq!(field.potential_at(GridCoord::new(2, 4)), 6.0 * step);
    }
}
