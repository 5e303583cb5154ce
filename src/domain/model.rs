use serde::Serialize;
use std::fmt;

/// A single contribution. Fields are private so a recorded donor can never be edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Donor {
    name: String,
    amount: f64,
}

impl Donor {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for Donor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Donor: {}, Amount: Rs{}",
            self.name,
            format_amount(self.amount)
        )
    }
}

/// Normalized campaign identity: surrounding whitespace trimmed, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CauseKey(String);

impl CauseKey {
    pub fn new(cause: &str) -> Self {
        Self(cause.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CauseKey {
    fn from(cause: &str) -> Self {
        Self::new(cause)
    }
}

impl fmt::Display for CauseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fundraising campaign and its donor history.
///
/// `current_amount` is only ever changed together with `donors` inside
/// [`Campaign::donate`], so it always equals the running sum of the donor amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    cause: String,
    target_amount: f64,
    current_amount: f64,
    deadline: String,
    donors: Vec<Donor>,
}

impl Campaign {
    pub fn new(cause: impl Into<String>, target_amount: f64, deadline: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
            target_amount,
            current_amount: 0.0,
            deadline: deadline.into(),
            donors: Vec::new(),
        }
    }

    pub fn donate(&mut self, donor_name: impl Into<String>, amount: f64) {
        self.donors.push(Donor::new(donor_name, amount));
        self.current_amount += amount;
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn key(&self) -> CauseKey {
        CauseKey::new(&self.cause)
    }

    pub fn target_amount(&self) -> f64 {
        self.target_amount
    }

    pub fn current_amount(&self) -> f64 {
        self.current_amount
    }

    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    pub fn donor_count(&self) -> usize {
        self.donors.len()
    }

    /// Fraction of the target raised so far. `None` when the target is zero or not finite.
    pub fn progress(&self) -> Option<f64> {
        if self.target_amount == 0.0 || !self.target_amount.is_finite() {
            return None;
        }
        Some(self.current_amount / self.target_amount)
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Campaign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Campaign: {}", self.cause)?;
        writeln!(f, "Target Amount: Rs{}", format_amount(self.target_amount))?;
        writeln!(f, "Current Amount: Rs{}", format_amount(self.current_amount))?;
        writeln!(f, "Deadline: {}", self.deadline)?;
        write!(f, "Donors: {}", self.donors.len())
    }
}

/// Renders an amount the way the donation desk always has. Magnitudes in
/// `[1e-3, 1e7)` print as decimals with at least one fractional digit
/// (`500.0`, `12.5`); anything outside that range uses `E` notation with the
/// same rule on the mantissa (`5.0E7`, `2.5E-4`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = format!("{}", amount);
        return if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        };
    }

    let scientific = format!("{:e}", amount);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donate_appends_and_accumulates() {
        let mut campaign = Campaign::new("Clean Water", 1000.0, "2025-06-30");
        campaign.donate("Alice", 120.5);
        campaign.donate("Bob", 79.5);

        assert_eq!(campaign.current_amount(), 200.0);
        assert_eq!(campaign.donor_count(), 2);
        assert_eq!(campaign.donors()[0], Donor::new("Alice", 120.5));
        assert_eq!(campaign.donors()[1].name(), "Bob");
        assert_eq!(campaign.target_amount(), 1000.0);
    }

    #[test]
    fn test_describe_matches_summary_layout() {
        let mut campaign = Campaign::new("Education", 500.0, "2025-01-01");
        campaign.donate("Alice", 100.0);

        assert_eq!(
            campaign.describe(),
            "Campaign: Education\nTarget Amount: Rs500.0\nCurrent Amount: Rs100.0\nDeadline: 2025-01-01\nDonors: 1"
        );
    }

    #[test]
    fn test_donor_display() {
        assert_eq!(
            Donor::new("Carl", 12.25).to_string(),
            "Donor: Carl, Amount: Rs12.25"
        );
    }

    #[test]
    fn test_cause_key_ignores_case_and_padding() {
        assert_eq!(CauseKey::new("Flood Relief"), CauseKey::new("  flood RELIEF "));
        assert_ne!(CauseKey::new("Flood Relief"), CauseKey::new("Flood-Relief"));
        assert_eq!(CauseKey::new("ÉCOLE").as_str(), "école");
    }

    #[test]
    fn test_progress() {
        let mut campaign = Campaign::new("Health", 200.0, "2025-01-01");
        campaign.donate("Dana", 50.0);
        assert_eq!(campaign.progress(), Some(0.25));

        let empty_target = Campaign::new("Zero", 0.0, "2025-01-01");
        assert_eq!(empty_target.progress(), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(500.0), "500.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(-20.0), "-20.0");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(9_999_999.0), "9999999.0");
        assert_eq!(format_amount(0.001), "0.001");
    }

    #[test]
    fn test_format_amount_uses_exponent_outside_decimal_range() {
        assert_eq!(format_amount(1e7), "1.0E7");
        assert_eq!(format_amount(5e7), "5.0E7");
        assert_eq!(format_amount(123_456_789.0), "1.23456789E8");
        assert_eq!(format_amount(-2.5e9), "-2.5E9");
        assert_eq!(format_amount(0.00025), "2.5E-4");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn test_describe_large_target() {
        let mut campaign = Campaign::new("Big", 5e7, "2025-01-01");
        campaign.donate("Z", 1e7);
        let text = campaign.describe();
        assert!(text.contains("Target Amount: Rs5.0E7\n"));
        assert!(text.contains("Current Amount: Rs1.0E7\n"));
    }
}
