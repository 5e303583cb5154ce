use crate::app::render::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "donation-desk")]
#[command(about = "Record donations against campaigns and review running totals")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target of a new campaign as a multiple of its first donation
    #[arg(long)]
    pub target_multiplier: Option<f64>,

    /// Deadline given to campaigns opened by a first donation
    #[arg(long)]
    pub default_deadline: Option<String>,

    /// Initial format for campaign and donor views
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress prompts and banners when reading commands from a pipe
    #[arg(long)]
    pub batch: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file when one was given, then lets command-line flags win.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from(&TomlConfig::from_file(path)?),
            None => Settings::default(),
        };

        self.apply_overrides(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(multiplier) = self.target_multiplier {
            settings.target_multiplier = multiplier;
        }
        if let Some(deadline) = &self.default_deadline {
            settings.default_deadline = deadline.clone();
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        settings.batch |= self.batch;
        settings.verbose |= self.verbose;
        settings.log_json |= self.log_json;
    }
}
