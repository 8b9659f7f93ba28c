//! `[output]` section: how command results are rendered

use serde::{Deserialize, Serialize};
use teamforge_domain::OutputFormat;

/// Rendering settings; `-o` and `--no-color` override these per invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileOutputConfig {
    /// `text` or `json`; unset means text
    pub format: Option<OutputFormat>,
    /// Colored text output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
