/// Source of the values used when a donation implicitly opens a new campaign.
pub trait ConfigProvider {
    fn target_multiplier(&self) -> f64;
    fn default_deadline(&self) -> &str;
}
