use super::types::{
    Campaign, CampaignStatus, CardStatus, Coupon, CouponStatus, PrepaidCard,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            name: "Summer cold brew launch",
            channel: "Push + in-app banner",
            starts: date(2026, 6, 1),
            ends: date(2026, 7, 15),
            status: CampaignStatus::Ended,
            reach: "48,200 customers",
        },
        Campaign {
            name: "Chuseok gift sets",
            channel: "Push",
            starts: date(2026, 9, 14),
            ends: date(2026, 10, 4),
            status: CampaignStatus::Running,
            reach: "31,050 customers",
        },
        Campaign {
            name: "Winter membership double points",
            channel: "In-app banner",
            starts: date(2026, 12, 1),
            ends: date(2027, 1, 31),
            status: CampaignStatus::Scheduled,
            reach: "—",
        },
    ]
}

pub(crate) fn coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            code: "WELCOME10",
            name: "New member 10% off",
            discount: "10%",
            redeemed: 1_204,
            issued: 5_000,
            expires: date(2026, 12, 31),
            status: CouponStatus::Active,
        },
        Coupon {
            code: "SUMMER26",
            name: "Summer drink ₩1,000 off",
            discount: "₩1,000",
            redeemed: 3_000,
            issued: 3_000,
            expires: date(2026, 8, 31),
            status: CouponStatus::Exhausted,
        },
        Coupon {
            code: "SPRING25",
            name: "Spring season set discount",
            discount: "15%",
            redeemed: 2_411,
            issued: 4_000,
            expires: date(2025, 5, 31),
            status: CouponStatus::Expired,
        },
        Coupon {
            code: "BDAY1SHOT",
            name: "Birthday free extra shot",
            discount: "Free item",
            redeemed: 612,
            issued: 10_000,
            expires: date(2026, 12, 31),
            status: CouponStatus::Active,
        },
    ]
}

pub(crate) fn prepaid_cards() -> Vec<PrepaidCard> {
    vec![
        PrepaidCard {
            number: "9410-****-2214",
            holder: "Seo Dain",
            balance: 42_500,
            issued: date(2025, 4, 2),
            status: CardStatus::Active,
        },
        PrepaidCard {
            number: "9410-****-8821",
            holder: "Moon Jaeha",
            balance: 7_000,
            issued: date(2025, 9, 17),
            status: CardStatus::Active,
        },
        PrepaidCard {
            number: "9410-****-0937",
            holder: "Bae Sumin",
            balance: 120_000,
            issued: date(2026, 1, 22),
            status: CardStatus::Active,
        },
        PrepaidCard {
            number: "9410-****-5178",
            holder: "Oh Chaerin",
            balance: 0,
            issued: date(2024, 11, 5),
            status: CardStatus::Suspended,
        },
    ]
}
