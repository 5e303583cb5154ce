pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::form::{DonationForm, ValidDonation};
pub use app::render::OutputFormat;
pub use app::session::{Session, SessionSummary};
pub use config::Settings;
pub use core::registry::{CampaignDefaults, DonationRegistry, RecordOutcome};
pub use domain::model::{Campaign, CauseKey, Donor};
pub use utils::error::{DeskError, Result};
