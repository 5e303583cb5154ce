use crate::app::render::OutputFormat;
use crate::core::registry::{DEFAULT_DEADLINE, DEFAULT_TARGET_MULTIPLIER};
use crate::core::ConfigProvider;
use crate::utils::error::{DeskError, Result};
use crate::utils::validation::{validate_finite_number, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub campaign: CampaignConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub target_multiplier: Option<f64>,
    pub default_deadline: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<OutputFormat>,
    pub batch: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DeskError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DeskError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left in place so the parse error points at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DeskError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(multiplier) = self.campaign.target_multiplier {
            validate_finite_number("campaign.target_multiplier", multiplier)?;
        }

        if let Some(deadline) = &self.campaign.default_deadline {
            validate_non_empty_string("campaign.default_deadline", deadline)?;
        }

        Ok(())
    }

    pub fn target_multiplier(&self) -> f64 {
        self.campaign
            .target_multiplier
            .unwrap_or(DEFAULT_TARGET_MULTIPLIER)
    }

    pub fn default_deadline(&self) -> &str {
        self.campaign
            .default_deadline
            .as_deref()
            .unwrap_or(DEFAULT_DEADLINE)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.display.format.unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn target_multiplier(&self) -> f64 {
        self.target_multiplier()
    }

    fn default_deadline(&self) -> &str {
        self.default_deadline()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[campaign]
target_multiplier = 3.0
default_deadline = "2026-03-31"

[display]
format = "json"
batch = true

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.target_multiplier(), 3.0);
        assert_eq!(config.default_deadline(), "2026-03-31");
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.display.batch, Some(true));
        assert_eq!(config.logging.verbose, Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.target_multiplier(), 5.0);
        assert_eq!(config.default_deadline(), "2025-01-01");
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DONATION_DESK_TEST_DEADLINE", "2027-07-07");

        let toml_content = r#"
[campaign]
default_deadline = "${DONATION_DESK_TEST_DEADLINE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_deadline(), "2027-07-07");

        std::env::remove_var("DONATION_DESK_TEST_DEADLINE");
    }

    #[test]
    fn test_config_validation() {
        let blank_deadline = TomlConfig::from_toml_str(
            r#"
[campaign]
default_deadline = "  "
"#,
        )
        .unwrap();
        assert!(blank_deadline.validate().is_err());

        let infinite = TomlConfig::from_toml_str(
            r#"
[campaign]
target_multiplier = inf
"#,
        )
        .unwrap();
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = TomlConfig::from_toml_str("[campaign\ntarget_multiplier = 2").unwrap_err();
        assert!(matches!(err, DeskError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[campaign]\ntarget_multiplier = 2.5\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.target_multiplier(), 2.5);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/donation-desk.toml").unwrap_err();
        assert!(matches!(err, DeskError::ConfigError { .. }));
    }
}
