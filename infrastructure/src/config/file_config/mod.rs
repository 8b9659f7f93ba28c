//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod grouping;
mod logging;
mod output;
mod roster;

pub use grouping::FileGroupingConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use roster::FileRosterConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("grouping.max_steps cannot be 0")]
    InvalidMaxSteps,

    #[error("grouping.min_pool_size cannot be 0")]
    InvalidMinPoolSize,

    #[error("roster.path cannot be empty")]
    EmptyRosterPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Member roster location
    pub roster: FileRosterConfig,
    /// Grouping run settings
    pub grouping: FileGroupingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Run log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected problem.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.grouping.max_steps == 0 {
            errors.push(ConfigValidationError::InvalidMaxSteps);
        }
        if self.grouping.min_pool_size == 0 {
            errors.push(ConfigValidationError::InvalidMinPoolSize);
        }
        if self.roster.path.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyRosterPath);
        }

        errors
    }
}
