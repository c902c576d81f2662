//! Operational notifications for the bell menu and notifications screen.

#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub title: &'static str,
    pub body: &'static str,
    pub time: &'static str,
    pub unread: bool,
}

pub(crate) fn notifications() -> Vec<NotificationItem> {
    vec![
        NotificationItem {
            title: "New store application",
            body: "Choi Haeun submitted the Sinchon store application for review.",
            time: "12 minutes ago",
            unread: true,
        },
        NotificationItem {
            title: "Coupon pool exhausted",
            body: "SUMMER26 reached its issue limit of 3,000.",
            time: "1 hour ago",
            unread: true,
        },
        NotificationItem {
            title: "Settlement report ready",
            body: "The weekly settlement report for all brands is ready to download.",
            time: "Today, 06:00",
            unread: false,
        },
        NotificationItem {
            title: "Campaign finished",
            body: "Summer cold brew launch ended. Reach: 48,200 customers.",
            time: "Jul 15",
            unread: false,
        },
    ]
}
