//! Planning orchestration.
//!
//! [`GradientPlanner`] is the public entry point: it maps the start and goal
//! into the grid, drives the potential field engine, relaxes an infeasible
//! goal within the configured tolerance, extracts the path by gradient
//! descent, and smooths the final approach.

mod smoother;
mod tolerance;

use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::core::{GridCoord, PlannedPath, Pose, WorldPoint};
use crate::costmap::{cost_values, Costmap};
use crate::error::{PlanError, Result};
use crate::field::PotentialField;

/// Potential-field global planner.
///
/// Owns its field engine; the engine is resized automatically whenever the
/// bound costmap's dimensions change, and fully repopulated on every call.
/// One planner instance serves one caller at a time. Planning mutates
/// engine state with no isolation, so concurrent callers need separate
/// planner instances or external serialization.
pub struct GradientPlanner {
    config: PlannerConfig,
    field: PotentialField,
}

impl GradientPlanner {
    /// Create a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            field: PotentialField::new(0, 0),
        }
    }

    /// Create a planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// Get the planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Compute a path from `start` to `goal` over `costmap`.
    ///
    /// Never fails: an empty path signals that no plan could be produced,
    /// with the reason logged.
    pub fn create_plan(&mut self, costmap: &mut dyn Costmap, start: &Pose, goal: &Pose) -> PlannedPath {
        let tolerance = self.config.tolerance;
        match self.make_plan(costmap, start, goal, tolerance) {
            Ok(path) => path,
            Err(err) => {
                warn!(
                    "failed to create plan with tolerance {:.2}: {}",
                    tolerance, err
                );
                PlannedPath::new(self.config.global_frame.clone())
            }
        }
    }

    /// Compute a path, reporting the failure reason on error.
    pub fn make_plan(
        &mut self,
        costmap: &mut dyn Costmap,
        start: &Pose,
        goal: &Pose,
        tolerance: f32,
    ) -> Result<PlannedPath> {
        let start_point = start.point();
        let goal_point = goal.point();

        debug!(
            "making plan from ({:.2}, {:.2}) to ({:.2}, {:.2})",
            start_point.x, start_point.y, goal_point.x, goal_point.y
        );

        let start_cell = costmap.world_to_grid(start_point).ok_or_else(|| {
            warn!(
                "start position is off the costmap; planning will always fail, \
                 is the robot properly localized?"
            );
            PlanError::StartOffGrid(start_point.x, start_point.y)
        })?;

        // A localized robot cannot be standing on an obstacle cell
        costmap.set_cost(start_cell, cost_values::FREE_SPACE);

        self.sync_field_size(costmap);
        self.field.set_cost_grid(costmap, self.config.allow_unknown);

        let goal_cell = costmap.world_to_grid(goal_point).ok_or_else(|| {
            warn!("goal position is off the costmap; planning will always fail to this goal");
            PlanError::GoalOffGrid(goal_point.x, goal_point.y)
        })?;

        // The engine runs with the endpoints swapped: the potential is
        // seeded at the navigation start, and descent walks from the goal
        // back to it. The extractor reverses the result.
        self.field.set_start(goal_cell);
        self.field.set_goal(start_cell);
        self.field.propagate(self.config.strategy());

        let reachable_goal =
            tolerance::find_reachable_goal(&self.field, costmap, goal_point, tolerance)
                .ok_or(PlanError::NoPathFound)?;

        let mut path = self.plan_from_potential(costmap, reachable_goal)?;
        smoother::smooth_approach_to_goal(goal, &mut path);

        Ok(path)
    }

    /// Extract a plan ending at `goal` from the already-computed field.
    fn plan_from_potential(
        &mut self,
        costmap: &dyn Costmap,
        goal: WorldPoint,
    ) -> Result<PlannedPath> {
        let goal_cell = costmap
            .world_to_grid(goal)
            .ok_or(PlanError::GoalOffGrid(goal.x, goal.y))?;

        self.field.set_start(goal_cell);
        let cells = self.field.extract_path(4 * costmap.width());
        if cells.is_empty() {
            debug!("no path found");
            return Err(PlanError::NoPathFound);
        }
        debug!("path found, {} steps", cells.len());

        // Descent runs goal-to-start; emit poses in start-to-goal order
        let mut path = PlannedPath::new(self.config.global_frame.clone());
        path.poses.reserve(cells.len());
        for &cell in cells.iter().rev() {
            path.poses.push(Pose::from_point(costmap.grid_to_world(cell)));
        }

        Ok(path)
    }

    /// Run a full propagation targeting grid cell (0, 0) from `point`.
    ///
    /// Leaves the computed field resident for subsequent
    /// [`get_point_potential`](Self::get_point_potential) queries. Returns
    /// whether the propagation connected.
    pub fn compute_potential(&mut self, costmap: &dyn Costmap, point: WorldPoint) -> bool {
        self.sync_field_size(costmap);
        self.field.set_cost_grid(costmap, self.config.allow_unknown);

        let Some(cell) = costmap.world_to_grid(point) else {
            return false;
        };

        self.field.set_start(GridCoord::new(0, 0));
        self.field.set_goal(cell);
        self.field.propagate(self.config.strategy())
    }

    /// Look up the resident potential at a world point without propagating.
    ///
    /// Returns `f32::MAX` if the point is off the grid.
    pub fn get_point_potential(&self, costmap: &dyn Costmap, point: WorldPoint) -> f32 {
        match costmap.world_to_grid(point) {
            Some(cell) => self.field.potential_at(cell),
            None => f32::MAX,
        }
    }

    /// True iff any sampled point within the configured tolerance of `point`
    /// has a potential below the unreachable sentinel.
    pub fn valid_point_potential(&self, costmap: &dyn Costmap, point: WorldPoint) -> bool {
        self.valid_point_potential_within(costmap, point, self.config.tolerance)
    }

    /// True iff any sampled point within `tolerance` of `point` has a
    /// potential below the unreachable sentinel.
    pub fn valid_point_potential_within(
        &self,
        costmap: &dyn Costmap,
        point: WorldPoint,
        tolerance: f32,
    ) -> bool {
        tolerance::find_reachable_goal(&self.field, costmap, point, tolerance).is_some()
    }

    /// Resize the field engine if it was sized for a different grid.
    fn sync_field_size(&mut self, costmap: &dyn Costmap) {
        if self.field.width() != costmap.width() || self.field.height() != costmap.height() {
            self.field.resize(costmap.width(), costmap.height());
        }
    }
}
