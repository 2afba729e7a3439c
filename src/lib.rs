//! # gradnav
//!
//! Potential-field (wavefront) global path planner for 2D occupancy
//! costmaps.
//!
//! ## Overview
//!
//! Given a costmap, a start pose and a goal pose, the planner computes a
//! scalar potential over the grid and extracts a collision-free path by
//! gradient descent:
//!
//! - **Costmap contract**: traversal costs behind the [`Costmap`] trait,
//!   with the world↔grid affine mapping built in
//! - **Potential field**: exhaustive wavefront or A*-guided propagation,
//!   selected by configuration
//! - **Goal tolerance**: an infeasible goal is relaxed to the nearest
//!   reachable point within a configurable radius
//! - **Approach smoothing**: the final path segment is fixed up to end at
//!   the requested goal pose
//!
//! ## Quick Start
//!
//! ```rust
//! use gradnav::{GradientPlanner, GridCostmap, Pose, WorldPoint};
//!
//! let mut costmap = GridCostmap::new(100, 100, 0.05, WorldPoint::ZERO);
//! let mut planner = GradientPlanner::with_defaults();
//!
//! let start = Pose::from_xy(0.5, 0.5);
//! let goal = Pose::from_xy(4.0, 3.0);
//!
//! let path = planner.create_plan(&mut costmap, &start, &goal);
//! assert!(!path.is_empty());
//! ```
//!
//! Planning is synchronous and single-threaded: one call runs to completion
//! and fully recomputes the field. Failure never panics; an empty path is
//! returned and the reason logged through `tracing`.

// Core geometry types
pub mod core;

// Costmap contract and coordinate mapping
pub mod costmap;

// Potential field engine
pub mod field;

// Planning orchestration
pub mod planner;

// Configuration
pub mod config;

// Error types
pub mod error;

pub use self::core::{GridCoord, PlannedPath, Point3, Pose, Quaternion, WorldPoint};

pub use costmap::{cost_values, Costmap, GridCostmap};

pub use field::{PotentialField, PropagationStrategy, POT_HIGH};

pub use planner::GradientPlanner;

pub use config::PlannerConfig;

pub use error::{PlanError, Result};
