use anyhow::Result;
use donation_desk::config::toml_config::TomlConfig;
use donation_desk::utils::validation::Validate;
use donation_desk::{CliConfig, DonationRegistry, OutputFormat, Settings};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_file_drives_registry_defaults() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[campaign]
target_multiplier = 10.0
default_deadline = "2026-12-31"

[display]
format = "csv"
batch = true
"#
    )?;

    let cli = CliConfig {
        config: Some(file.path().to_path_buf()),
        ..CliConfig::default()
    };
    let settings = cli.resolve()?;
    assert_eq!(settings.format, OutputFormat::Csv);
    assert!(settings.batch);

    let mut registry = DonationRegistry::from_config(&settings);
    registry.record_donation("Water", "Kim", 7.0);
    let campaign = registry.campaign("water").expect("campaign exists");
    assert_eq!(campaign.target_amount(), 70.0);
    assert_eq!(campaign.deadline(), "2026-12-31");
    Ok(())
}

#[test]
fn test_invalid_multiplier_in_file_is_rejected() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[campaign]\ntarget_multiplier = nan\n")?;

    let config = TomlConfig::from_file(file.path())?;
    assert!(config.validate().is_err());

    let cli = CliConfig {
        config: Some(file.path().to_path_buf()),
        ..CliConfig::default()
    };
    assert!(cli.resolve().is_err());
    Ok(())
}

#[test]
fn test_unknown_format_in_file_is_rejected() {
    let result = TomlConfig::from_toml_str("[display]\nformat = \"xml\"\n");
    assert!(result.is_err());
}

#[test]
fn test_defaults_without_config() -> Result<()> {
    let settings = CliConfig::default().resolve()?;
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.target_multiplier, 5.0);
    assert_eq!(settings.default_deadline, "2025-01-01");
    Ok(())
}
