use crate::core::registry::{DonationRegistry, RecordOutcome};
use crate::utils::error::{DeskError, Result};
use crate::utils::validation::{is_blank, parse_amount};

/// Raw text of the three donation fields, exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationForm {
    pub cause: String,
    pub donor_name: String,
    pub amount: String,
}

impl DonationForm {
    pub fn new(
        cause: impl Into<String>,
        donor_name: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            cause: cause.into(),
            donor_name: donor_name.into(),
            amount: amount.into(),
        }
    }

    /// Reads `cause | name | amount`. Missing parts come back empty and are
    /// caught by [`DonationForm::validate`].
    pub fn parse_inline(line: &str) -> Self {
        let mut parts = line.splitn(3, '|');
        let mut next = || parts.next().unwrap_or("").trim().to_string();
        let cause = next();
        let donor_name = next();
        let amount = next();
        Self {
            cause,
            donor_name,
            amount,
        }
    }

    pub fn validate(&self) -> Result<ValidDonation> {
        let blank: Vec<&'static str> = [
            ("cause", self.cause.as_str()),
            ("donor name", self.donor_name.as_str()),
            ("amount", self.amount.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect();

        if !blank.is_empty() {
            return Err(DeskError::MissingFields { fields: blank });
        }

        let amount = parse_amount(&self.amount)?;

        Ok(ValidDonation {
            cause: self.cause.trim().to_string(),
            donor_name: self.donor_name.trim().to_string(),
            amount,
        })
    }
}

/// A donation that passed form validation and can be handed to the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDonation {
    cause: String,
    donor_name: String,
    amount: f64,
}

impl ValidDonation {
    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn donor_name(&self) -> &str {
        &self.donor_name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn submit(&self, registry: &mut DonationRegistry) -> RecordOutcome {
        registry.record_donation(&self.cause, &self.donor_name, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let donation = DonationForm::new(" Education ", "Alice", "100").validate().unwrap();
        assert_eq!(donation.cause(), "Education");
        assert_eq!(donation.donor_name(), "Alice");
        assert_eq!(donation.amount(), 100.0);
    }

    #[test]
    fn test_blank_fields_are_listed() {
        let err = DonationForm::new("", "Alice", "  ").validate().unwrap_err();
        match err {
            DeskError::MissingFields { fields } => assert_eq!(fields, vec!["cause", "amount"]),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_amount() {
        let err = DonationForm::new("Health", "Bob", "fifty").validate().unwrap_err();
        assert!(matches!(err, DeskError::InvalidAmount { ref input } if input == "fifty"));
    }

    #[test]
    fn test_blank_fields_win_over_bad_amount() {
        let err = DonationForm::new("", "Bob", "fifty").validate().unwrap_err();
        assert!(matches!(err, DeskError::MissingFields { .. }));
    }

    #[test]
    fn test_parse_inline() {
        let form = DonationForm::parse_inline("Flood Relief | Ann Lee | 25.5");
        assert_eq!(form, DonationForm::new("Flood Relief", "Ann Lee", "25.5"));

        let partial = DonationForm::parse_inline("Flood Relief");
        assert_eq!(partial.donor_name, "");
        assert!(partial.validate().is_err());
    }

    #[test]
    fn test_rejected_form_leaves_registry_untouched() {
        let mut registry = DonationRegistry::new();
        if let Ok(donation) = DonationForm::new("Health", "", "10").validate() {
            donation.submit(&mut registry);
        }
        assert!(registry.is_empty());

        let outcome = DonationForm::new("Health", "Dana", "10")
            .validate()
            .unwrap()
            .submit(&mut registry);
        assert_eq!(outcome, RecordOutcome::Created);
        assert_eq!(registry.len(), 1);
    }
}
