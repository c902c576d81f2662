//! Headline numbers and ranking fixtures for the dashboard home screen.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Debug)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub basis: &'static str,
}

pub(crate) fn stats() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total stores",
            value: "142",
            change: "+12%",
            trend: Trend::Up,
            basis: "vs. last month",
        },
        StatCard {
            title: "Active owners",
            value: "128",
            change: "+8%",
            trend: Trend::Up,
            basis: "vs. last month",
        },
        StatCard {
            title: "Orders today",
            value: "1,847",
            change: "+23%",
            trend: Trend::Up,
            basis: "vs. yesterday",
        },
        StatCard {
            title: "Revenue today",
            value: "₩12.4M",
            change: "-5%",
            trend: Trend::Down,
            basis: "vs. yesterday",
        },
    ]
}

#[derive(Clone, Debug)]
pub struct TopStore {
    pub name: &'static str,
    /// Monthly revenue in won.
    pub revenue: u64,
    pub orders: u32,
    pub growth: &'static str,
}

pub(crate) fn top_stores() -> Vec<TopStore> {
    vec![
        TopStore {
            name: "Gangnam",
            revenue: 2_400_000,
            orders: 234,
            growth: "+15%",
        },
        TopStore {
            name: "Hongdae",
            revenue: 2_100_000,
            orders: 198,
            growth: "+12%",
        },
        TopStore {
            name: "Pangyo",
            revenue: 1_900_000,
            orders: 187,
            growth: "+8%",
        },
        TopStore {
            name: "Sinchon",
            revenue: 1_700_000,
            orders: 165,
            growth: "+5%",
        },
    ]
}
