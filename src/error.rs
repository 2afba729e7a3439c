//! Error types for the planner.

use thiserror::Error;

/// Planning error.
///
/// All failures are local to one planning call; no shared state is left
/// corrupted since the potential field is fully repopulated each time.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The start pose maps outside the costmap bounds.
    #[error("start position ({0:.2}, {1:.2}) is off the costmap")]
    StartOffGrid(f32, f32),

    /// The goal pose maps outside the costmap bounds. No tolerance
    /// relaxation is attempted for an off-grid goal.
    #[error("goal position ({0:.2}, {1:.2}) is off the costmap")]
    GoalOffGrid(f32, f32),

    /// Propagation and extraction yielded no connecting path, even after
    /// tolerance relaxation.
    #[error("no path found to the goal")]
    NoPathFound,

    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for PlanError {
    fn from(e: std::io::Error) -> Self {
        PlanError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for PlanError {
    fn from(e: toml::de::Error) -> Self {
        PlanError::Config(e.to_string())
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, PlanError>;
