//! Presentation-level configuration
//!
//! Resolves how results are rendered from the file configuration and the
//! command-line overrides.

use teamforge_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Merge the configured values with command-line flags
    ///
    /// A format given on the command line wins over the configured one, and
    /// `--no-color` always disables color.
    pub fn resolve(
        configured_format: Option<OutputFormat>,
        configured_color: bool,
        cli_format: Option<OutputFormat>,
        no_color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(configured_format).unwrap_or_default(),
            color: configured_color && !no_color,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Apply the color setting to the process-wide `colored` switch
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
