#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::app::render::OutputFormat;
use crate::core::registry::{DEFAULT_DEADLINE, DEFAULT_TARGET_MULTIPLIER};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_number, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

/// Effective settings after merging the config file and command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub target_multiplier: f64,
    pub default_deadline: String,
    pub format: OutputFormat,
    pub batch: bool,
    pub verbose: bool,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_multiplier: DEFAULT_TARGET_MULTIPLIER,
            default_deadline: DEFAULT_DEADLINE.to_string(),
            format: OutputFormat::default(),
            batch: false,
            verbose: false,
            log_json: false,
        }
    }
}

impl From<&TomlConfig> for Settings {
    fn from(config: &TomlConfig) -> Self {
        Self {
            target_multiplier: config.target_multiplier(),
            default_deadline: config.default_deadline().to_string(),
            format: config.output_format(),
            batch: config.display.batch.unwrap_or(false),
            verbose: config.logging.verbose.unwrap_or(false),
            log_json: config.logging.json.unwrap_or(false),
        }
    }
}

impl ConfigProvider for Settings {
    fn target_multiplier(&self) -> f64 {
        self.target_multiplier
    }

    fn default_deadline(&self) -> &str {
        &self.default_deadline
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_finite_number("target_multiplier", self.target_multiplier)?;
        validate_non_empty_string("default_deadline", &self.default_deadline)?;
        Ok(())
    }
}
