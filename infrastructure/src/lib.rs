//! Infrastructure layer for teamforge
//!
//! This crate contains adapters that implement the ports defined
//! in the domain and application layers, including configuration file loading.

pub mod config;
pub mod logging;
pub mod roster;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGroupingConfig, FileLoggingConfig,
    FileOutputConfig, FileRosterConfig,
};
pub use logging::JsonlGroupingLogger;
pub use roster::{InMemoryRoster, JsonRosterRepository, RosterError};
