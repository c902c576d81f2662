//! Brand records for the multi-brand overview screen.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrandStatus {
    Live,
    Onboarding,
}

impl BrandStatus {
    pub fn label(self) -> &'static str {
        match self {
            BrandStatus::Live => "Live",
            BrandStatus::Onboarding => "Onboarding",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Brand {
    pub name: &'static str,
    pub code: &'static str,
    pub category: &'static str,
    pub store_count: u32,
    pub status: BrandStatus,
}

pub(crate) fn brands() -> Vec<Brand> {
    vec![
        Brand {
            name: "Sobok Coffee",
            code: "SOBOK",
            category: "Coffee & dessert",
            store_count: 142,
            status: BrandStatus::Live,
        },
        Brand {
            name: "Haru Bakery",
            code: "HARU01",
            category: "Bakery",
            store_count: 38,
            status: BrandStatus::Live,
        },
        Brand {
            name: "Dalbit Tea House",
            code: "DALBIT",
            category: "Tea",
            store_count: 5,
            status: BrandStatus::Onboarding,
        },
    ]
}
