//! In-app content posts (announcements, menu stories) for the contents screen.

use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishStatus {
    Draft,
    Published,
}

impl PublishStatus {
    pub fn label(self) -> &'static str {
        match self {
            PublishStatus::Draft => "Draft",
            PublishStatus::Published => "Published",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ContentPost {
    pub title: &'static str,
    pub category: &'static str,
    pub status: PublishStatus,
    pub published: Option<NaiveDate>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn posts() -> Vec<ContentPost> {
    vec![
        ContentPost {
            title: "New winter menu is here",
            category: "Menu",
            status: PublishStatus::Published,
            published: Some(date(2026, 11, 20)),
        },
        ContentPost {
            title: "Holiday opening hours",
            category: "Notice",
            status: PublishStatus::Published,
            published: Some(date(2026, 12, 18)),
        },
        ContentPost {
            title: "Membership tier revamp",
            category: "Notice",
            status: PublishStatus::Draft,
            published: None,
        },
        ContentPost {
            title: "Barista of the month: Pangyo",
            category: "Story",
            status: PublishStatus::Published,
            published: Some(date(2026, 10, 2)),
        },
    ]
}
