//! Roster configuration from TOML (`[roster]` section)

use serde::{Deserialize, Serialize};

/// Default roster file, relative to the working directory
pub const DEFAULT_ROSTER_PATH: &str = "members.json";

/// Raw roster configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRosterConfig {
    /// Path to the JSON member roster
    pub path: String,
}

impl Default for FileRosterConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_ROSTER_PATH.to_string(),
        }
    }
}
