//! Monthly revenue roll-ups for the analytics screen. Numbers are fixture
//! data; charting is deliberately out of scope for this build.

#[derive(Clone, Debug)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    /// Revenue in won.
    pub revenue: u64,
    pub orders: u32,
    /// Percent change vs. the previous month.
    pub delta: i32,
}

pub(crate) fn monthly_revenue() -> Vec<MonthlyRevenue> {
    vec![
        MonthlyRevenue {
            month: "March 2026",
            revenue: 318_400_000,
            orders: 41_220,
            delta: 4,
        },
        MonthlyRevenue {
            month: "April 2026",
            revenue: 334_100_000,
            orders: 43_815,
            delta: 5,
        },
        MonthlyRevenue {
            month: "May 2026",
            revenue: 352_700_000,
            orders: 46_002,
            delta: 6,
        },
        MonthlyRevenue {
            month: "June 2026",
            revenue: 389_900_000,
            orders: 50_134,
            delta: 11,
        },
        MonthlyRevenue {
            month: "July 2026",
            revenue: 401_200_000,
            orders: 52_890,
            delta: 3,
        },
        MonthlyRevenue {
            month: "August 2026",
            revenue: 396_800_000,
            orders: 51_477,
            delta: -1,
        },
    ]
}
