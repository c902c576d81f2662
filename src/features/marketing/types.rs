use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    Scheduled,
    Running,
    Ended,
}

impl CampaignStatus {
    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Scheduled => "Scheduled",
            CampaignStatus::Running => "Running",
            CampaignStatus::Ended => "Ended",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Campaign {
    pub name: &'static str,
    pub channel: &'static str,
    pub starts: NaiveDate,
    pub ends: NaiveDate,
    pub status: CampaignStatus,
    pub reach: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CouponStatus {
    Active,
    Exhausted,
    Expired,
}

impl CouponStatus {
    pub fn label(self) -> &'static str {
        match self {
            CouponStatus::Active => "Active",
            CouponStatus::Exhausted => "Exhausted",
            CouponStatus::Expired => "Expired",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Coupon {
    pub code: &'static str,
    pub name: &'static str,
    pub discount: &'static str,
    pub redeemed: u32,
    pub issued: u32,
    pub expires: NaiveDate,
    pub status: CouponStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStatus {
    Active,
    Suspended,
}

impl CardStatus {
    pub fn label(self) -> &'static str {
        match self {
            CardStatus::Active => "Active",
            CardStatus::Suspended => "Suspended",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PrepaidCard {
    pub number: &'static str,
    pub holder: &'static str,
    /// Remaining balance in won.
    pub balance: u64,
    pub issued: NaiveDate,
    pub status: CardStatus,
}
