//! Franchise owner records and the fixture slice behind the owners screen.

use chrono::NaiveDate;

#[derive(Clone, Debug)]
pub struct Owner {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub store_count: u32,
    pub joined: NaiveDate,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn owners() -> Vec<Owner> {
    vec![
        Owner {
            id: "OW-001",
            name: "Kim Jiwoo",
            email: "jiwoo.kim@sobok.example",
            phone: "010-2847-1193",
            store_count: 2,
            joined: date(2023, 2, 14),
        },
        Owner {
            id: "OW-002",
            name: "Lee Seojun",
            email: "seojun.lee@sobok.example",
            phone: "010-9034-7721",
            store_count: 1,
            joined: date(2023, 6, 1),
        },
        Owner {
            id: "OW-003",
            name: "Park Minseo",
            email: "minseo.park@sobok.example",
            phone: "010-5512-0486",
            store_count: 1,
            joined: date(2023, 12, 20),
        },
        Owner {
            id: "OW-004",
            name: "Choi Haeun",
            email: "haeun.choi@sobok.example",
            phone: "010-7768-3350",
            store_count: 1,
            joined: date(2025, 10, 8),
        },
        Owner {
            id: "OW-005",
            name: "Han Yuna",
            email: "yuna.han@sobok.example",
            phone: "010-3381-9907",
            store_count: 3,
            joined: date(2024, 5, 30),
        },
    ]
}
