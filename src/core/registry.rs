use crate::core::{Campaign, CauseKey, ConfigProvider};
use std::collections::HashMap;

pub const DEFAULT_TARGET_MULTIPLIER: f64 = 5.0;
pub const DEFAULT_DEADLINE: &str = "2025-01-01";

/// Values applied to a campaign opened by its first donation.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDefaults {
    pub target_multiplier: f64,
    pub deadline: String,
}

impl CampaignDefaults {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            target_multiplier: config.target_multiplier(),
            deadline: config.default_deadline().to_string(),
        }
    }
}

impl Default for CampaignDefaults {
    fn default() -> Self {
        Self {
            target_multiplier: DEFAULT_TARGET_MULTIPLIER,
            deadline: DEFAULT_DEADLINE.to_string(),
        }
    }
}

impl ConfigProvider for CampaignDefaults {
    fn target_multiplier(&self) -> f64 {
        self.target_multiplier
    }

    fn default_deadline(&self) -> &str {
        &self.deadline
    }
}

/// Whether a recorded donation landed in an existing campaign or opened a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Created,
    Existing,
}

/// All campaigns, in the order their causes were first seen.
#[derive(Debug, Clone, Default)]
pub struct DonationRegistry {
    campaigns: Vec<Campaign>,
    index: HashMap<CauseKey, usize>,
    defaults: CampaignDefaults,
}

impl DonationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: CampaignDefaults) -> Self {
        Self {
            campaigns: Vec::new(),
            index: HashMap::new(),
            defaults,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::with_defaults(CampaignDefaults::from_config(config))
    }

    pub fn defaults(&self) -> &CampaignDefaults {
        &self.defaults
    }

    /// Records `amount` from `donor_name` against `cause`, opening a campaign when
    /// no cause with the same key exists yet. Amounts are taken as given; callers
    /// are responsible for rejecting blank fields and unparseable input.
    pub fn record_donation(&mut self, cause: &str, donor_name: &str, amount: f64) -> RecordOutcome {
        let key = CauseKey::new(cause);

        if let Some(&position) = self.index.get(&key) {
            let campaign = &mut self.campaigns[position];
            campaign.donate(donor_name, amount);
            tracing::debug!(
                "Recorded {} from '{}' for '{}' (total {})",
                amount,
                donor_name,
                campaign.cause(),
                campaign.current_amount()
            );
            return RecordOutcome::Existing;
        }

        let target = amount * self.defaults.target_multiplier;
        let mut campaign = Campaign::new(cause, target, self.defaults.deadline.clone());
        campaign.donate(donor_name, amount);

        tracing::info!(
            "Opened campaign '{}' with target {} and deadline {}",
            campaign.cause(),
            target,
            campaign.deadline()
        );

        self.index.insert(key, self.campaigns.len());
        self.campaigns.push(campaign);
        RecordOutcome::Created
    }

    pub fn list_campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn campaign(&self, cause: &str) -> Option<&Campaign> {
        self.index
            .get(&CauseKey::new(cause))
            .map(|&position| &self.campaigns[position])
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    pub fn total_raised(&self) -> f64 {
        self.campaigns.iter().map(Campaign::current_amount).sum()
    }
}
