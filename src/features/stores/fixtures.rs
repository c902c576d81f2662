use super::types::{Store, StoreStatus};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn stores() -> Vec<Store> {
    vec![
        Store {
            id: "ST-001",
            name: "Gangnam",
            address: "152 Teheran-ro, Gangnam-gu, Seoul",
            owner: "Kim Jiwoo",
            status: StoreStatus::Active,
            opened: date(2023, 3, 2),
        },
        Store {
            id: "ST-002",
            name: "Hongdae",
            address: "29 Wausan-ro, Mapo-gu, Seoul",
            owner: "Lee Seojun",
            status: StoreStatus::Active,
            opened: date(2023, 6, 18),
        },
        Store {
            id: "ST-003",
            name: "Pangyo",
            address: "235 Pangyoyeok-ro, Bundang-gu, Seongnam",
            owner: "Park Minseo",
            status: StoreStatus::Active,
            opened: date(2024, 1, 9),
        },
        Store {
            id: "ST-004",
            name: "Sinchon",
            address: "83 Yonsei-ro, Seodaemun-gu, Seoul",
            owner: "Choi Haeun",
            status: StoreStatus::Pending,
            opened: date(2025, 11, 3),
        },
        Store {
            id: "ST-005",
            name: "Yeoksam",
            address: "8 Nonhyeon-ro, Gangnam-gu, Seoul",
            owner: "Jung Dohyun",
            status: StoreStatus::Inactive,
            opened: date(2022, 9, 27),
        },
        Store {
            id: "ST-006",
            name: "Busan Seomyeon",
            address: "672 Jungang-daero, Busanjin-gu, Busan",
            owner: "Han Yuna",
            status: StoreStatus::Active,
            opened: date(2024, 7, 21),
        },
    ]
}
