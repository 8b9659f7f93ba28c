//! Grouping configuration from TOML (`[grouping]` section)

use serde::{Deserialize, Serialize};
use teamforge_application::{DEFAULT_MIN_POOL_SIZE, GroupingParams};
use teamforge_domain::grouping::DEFAULT_MAX_STEPS;

/// Raw grouping configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroupingConfig {
    /// Step cap for building a single group
    pub max_steps: usize,
    /// Smallest pool accepted for grouping
    pub min_pool_size: usize,
    /// Fixed seed for reproducible groups
    pub seed: Option<u64>,
}

impl Default for FileGroupingConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            seed: None,
        }
    }
}

impl FileGroupingConfig {
    /// Convert to application parameters
    pub fn to_params(&self) -> GroupingParams {
        GroupingParams::default()
            .with_max_steps(self.max_steps)
            .with_min_pool_size(self.min_pool_size)
            .with_seed(self.seed)
    }
}
