//! Owner inquiries routed to the franchise support desk.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquiryStatus {
    Open,
    Answered,
    Closed,
}

impl InquiryStatus {
    pub fn label(self) -> &'static str {
        match self {
            InquiryStatus::Open => "Open",
            InquiryStatus::Answered => "Answered",
            InquiryStatus::Closed => "Closed",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Inquiry {
    pub subject: &'static str,
    pub store: &'static str,
    pub status: InquiryStatus,
    pub created: &'static str,
}

pub(crate) fn inquiries() -> Vec<Inquiry> {
    vec![
        Inquiry {
            subject: "POS terminal not syncing orders",
            store: "Sinchon",
            status: InquiryStatus::Open,
            created: "1 hour ago",
        },
        Inquiry {
            subject: "Request: additional signage kit",
            store: "Busan Seomyeon",
            status: InquiryStatus::Answered,
            created: "Yesterday",
        },
        Inquiry {
            subject: "Coupon settlement statement mismatch",
            store: "Gangnam",
            status: InquiryStatus::Answered,
            created: "2 days ago",
        },
        Inquiry {
            subject: "Seasonal menu training materials",
            store: "Hongdae",
            status: InquiryStatus::Closed,
            created: "Last week",
        },
    ]
}
