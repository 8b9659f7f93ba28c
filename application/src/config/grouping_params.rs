//! Grouping parameters for use case control.
//!
//! [`GroupingParams`] groups the static parameters that control how the
//! grouping use cases run. These are application-layer concerns; the scoring
//! rules themselves live in the domain.

use serde::{Deserialize, Serialize};
use teamforge_domain::grouping::DEFAULT_MAX_STEPS;

/// Smallest pool a grouping run accepts by default
pub const DEFAULT_MIN_POOL_SIZE: usize = 3;

/// Grouping run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingParams {
    /// Step cap for the single-group builder.
    pub max_steps: usize,
    /// Pools smaller than this are rejected before grouping.
    pub min_pool_size: usize,
    /// Seed for candidate selection. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GroupingParams {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            seed: None,
        }
    }
}

impl GroupingParams {
    // ==================== Builder Methods ====================

    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }

    pub fn with_min_pool_size(mut self, min: usize) -> Self {
        self.min_pool_size = min;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
