use crate::core::registry::DonationRegistry;
use crate::core::{Campaign, Donor};
use crate::utils::error::{DeskError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(DeskError::UnknownFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

#[derive(Serialize)]
struct DonorListing<'a> {
    cause: &'a str,
    donors: &'a [Donor],
}

#[derive(Serialize)]
struct Report<'a> {
    generated_at: DateTime<Utc>,
    campaign_count: usize,
    total_raised: f64,
    campaigns: &'a [Campaign],
}

/// Summary of every campaign, in the order causes were first seen.
pub fn campaigns_view(registry: &DonationRegistry, format: OutputFormat) -> Result<String> {
    let campaigns = registry.list_campaigns();
    match format {
        OutputFormat::Text => Ok(campaigns
            .iter()
            .map(|campaign| format!("{}\n\n", campaign.describe()))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(campaigns)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record([
                "cause",
                "target_amount",
                "current_amount",
                "deadline",
                "donors",
            ])?;
            for campaign in campaigns {
                writer.write_record([
                    campaign.cause().to_string(),
                    campaign.target_amount().to_string(),
                    campaign.current_amount().to_string(),
                    campaign.deadline().to_string(),
                    campaign.donor_count().to_string(),
                ])?;
            }
            finish_csv(writer)
        }
    }
}

/// Every donor grouped under its campaign.
pub fn donors_view(registry: &DonationRegistry, format: OutputFormat) -> Result<String> {
    let campaigns = registry.list_campaigns();
    match format {
        OutputFormat::Text => {
            let mut text = String::from("Donors:\n");
            for campaign in campaigns {
                text.push_str(&format!("Campaign: {}\n", campaign.cause()));
                for donor in campaign.donors() {
                    text.push_str(&format!("{}\n", donor));
                }
                text.push('\n');
            }
            Ok(text)
        }
        OutputFormat::Json => {
            let listings: Vec<DonorListing<'_>> = campaigns
                .iter()
                .map(|campaign| DonorListing {
                    cause: campaign.cause(),
                    donors: campaign.donors(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&listings)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["cause", "donor", "amount"])?;
            for campaign in campaigns {
                for donor in campaign.donors() {
                    let amount = donor.amount().to_string();
                    writer.write_record([campaign.cause(), donor.name(), amount.as_str()])?;
                }
            }
            finish_csv(writer)
        }
    }
}

/// JSON snapshot of the whole registry with a generation timestamp.
pub fn report(registry: &DonationRegistry) -> Result<String> {
    let report = Report {
        generated_at: Utc::now(),
        campaign_count: registry.len(),
        total_raised: registry.total_raised(),
        campaigns: registry.list_campaigns(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| DeskError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| DeskError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
