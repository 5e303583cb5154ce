pub mod registry;

pub use crate::domain::model::{format_amount, Campaign, CauseKey, Donor};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
