//! Potential field engine.
//!
//! Computes a scalar potential per grid cell such that descending the
//! gradient from any reachable cell leads toward the cell the field was
//! seeded at. The planner drives it through a small contract:
//!
//! 1. [`PotentialField::resize`] whenever the costmap dimensions change
//! 2. [`PotentialField::set_cost_grid`] to bind this call's costs
//! 3. [`PotentialField::set_start`] / [`PotentialField::set_goal`]
//! 4. [`PotentialField::propagate`] with a [`PropagationStrategy`]
//! 5. [`PotentialField::extract_path`] or [`PotentialField::potential_at`]
//!
//! The field is recomputed in full on every propagation; nothing is reused
//! across planning calls.

mod descent;
mod propagation;

use crate::core::GridCoord;
use crate::costmap::{cost_values, Costmap};

/// Sentinel potential for cells with no feasible path discovered.
pub const POT_HIGH: f32 = 1.0e10;

/// Baseline traversal cost of a free cell.
pub(crate) const COST_NEUTRAL: u8 = 50;
/// Scale applied to incoming cell costs on top of the neutral baseline.
pub(crate) const COST_FACTOR: f32 = 0.8;
/// Internal cost at and above which a cell blocks propagation.
pub(crate) const COST_OBS: u8 = 254;
/// Incoming costs at and above this are treated as obstacles.
const COST_OBS_INSCRIBED: u8 = 253;

/// How the potential is propagated across the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationStrategy {
    /// Exhaustive cost-wave expansion over all reachable cells.
    Wavefront,
    /// Heuristic-guided expansion toward the target cell.
    AStar,
}

/// A potential field over a cost grid.
///
/// Owns a translated copy of the cell costs and the potential array for the
/// duration of one planning call.
#[derive(Clone, Debug)]
pub struct PotentialField {
    width: usize,
    height: usize,
    costs: Vec<u8>,
    potential: Vec<f32>,
    start: GridCoord,
    goal: GridCoord,
}

impl PotentialField {
    /// Create a field for a grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            costs: vec![COST_OBS; size],
            potential: vec![POT_HIGH; size],
            start: GridCoord::new(0, 0),
            goal: GridCoord::new(0, 0),
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reallocate internal state for a new grid size.
    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    /// Bind the field to the current cost data.
    ///
    /// Costs are translated into internal traversal costs: free space maps
    /// to the neutral cost, scaled costs saturate just below the obstacle
    /// threshold, and lethal or inscribed cells block. Unknown cells block
    /// unless `allow_unknown` is set, in which case they are traversable at
    /// the highest non-blocking cost.
    pub fn set_cost_grid(&mut self, grid: &dyn Costmap, allow_unknown: bool) {
        debug_assert_eq!(self.width, grid.width());
        debug_assert_eq!(self.height, grid.height());

        for y in 0..self.height {
            for x in 0..self.width {
                let value = grid.cost_at(GridCoord::new(x as i32, y as i32));
                self.costs[y * self.width + x] = Self::translate_cost(value, allow_unknown);
            }
        }
    }

    fn translate_cost(value: u8, allow_unknown: bool) -> u8 {
        if value == cost_values::NO_INFORMATION {
            if allow_unknown {
                COST_OBS - 1
            } else {
                COST_OBS
            }
        } else if value >= COST_OBS_INSCRIBED {
            COST_OBS
        } else {
            // With the guard above capping input at 252, the scaled value
            // tops out at 251 and never reaches the obstacle band.
            let scaled = COST_NEUTRAL as f32 + COST_FACTOR * value as f32;
            scaled as u8
        }
    }

    /// Register the cell gradient descent begins from.
    pub fn set_start(&mut self, cell: GridCoord) {
        self.start = cell;
    }

    /// Register the cell the potential is seeded at (descent target).
    pub fn set_goal(&mut self, cell: GridCoord) {
        self.goal = cell;
    }

    /// Potential at a cell, or [`POT_HIGH`] for out-of-bounds indices.
    #[inline]
    pub fn potential_at(&self, cell: GridCoord) -> f32 {
        match self.index(cell) {
            Some(idx) => self.potential[idx],
            None => POT_HIGH,
        }
    }

    #[inline]
    pub(crate) fn index(&self, cell: GridCoord) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}
