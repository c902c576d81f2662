//! Campaign, coupon, and prepaid-card records for the marketing screens.

pub(crate) mod fixtures;
pub(crate) mod types;
