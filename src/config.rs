//! Planner configuration.
//!
//! All fields have defaults, so a config can come from a TOML file with any
//! subset of keys, or from [`PlannerConfig::default`] with no file at all.
//!
//! ## Example TOML
//!
//! ```toml
//! tolerance = 0.5        # goal relaxation radius in meters
//! use_astar = false      # heuristic-guided propagation
//! allow_unknown = true   # plan through unobserved cells
//! global_frame = "map"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::field::PropagationStrategy;

/// Configuration for [`GradientPlanner`](crate::GradientPlanner).
#[derive(Clone, Debug, Deserialize)]
pub struct PlannerConfig {
    /// Goal tolerance radius in meters. With 0.0 only the literal goal
    /// is accepted.
    #[serde(default)]
    pub tolerance: f32,

    /// Use heuristic-guided propagation instead of the exhaustive wavefront.
    #[serde(default)]
    pub use_astar: bool,

    /// Allow planning through cells never observed by any sensor.
    #[serde(default = "default_allow_unknown")]
    pub allow_unknown: bool,

    /// World frame produced plans are stamped with.
    #[serde(default = "default_global_frame")]
    pub global_frame: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            use_astar: false,
            allow_unknown: true,
            global_frame: default_global_frame(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Propagation strategy selected by this configuration.
    pub fn strategy(&self) -> PropagationStrategy {
        if self.use_astar {
            PropagationStrategy::AStar
        } else {
            PropagationStrategy::Wavefront
        }
    }
}

fn default_allow_unknown() -> bool {
    true
}

fn default_global_frame() -> String {
    "map".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();

        assert_eq!(config.tolerance, 0.0);
        assert!(!config.use_astar);
        assert!(config.allow_unknown);
        assert_eq!(config.global_frame, "map");
        assert_eq!(config.strategy(), PropagationStrategy::Wavefront);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PlannerConfig = toml::from_str("tolerance = 0.5\nuse_astar = true").unwrap();

        assert_eq!(config.tolerance, 0.5);
        assert_eq!(config.strategy(), PropagationStrategy::AStar);
        assert!(config.allow_unknown);
        assert_eq!(config.global_frame, "map");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: PlannerConfig = toml::from_str("").unwrap();
        assert!(config.allow_unknown);
        assert!(!config.use_astar);
    }
}
