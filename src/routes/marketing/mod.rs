mod campaigns;
mod coupons;
mod prepaid_cards;

pub(crate) use campaigns::CampaignsPage;
pub(crate) use coupons::CouponsPage;
pub(crate) use prepaid_cards::PrepaidCardsPage;
