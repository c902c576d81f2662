use super::types::{Order, OrderStatus};

pub(crate) fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-1041",
            store: "Gangnam",
            summary: "Americano + 3 more",
            total: 45_000,
            status: OrderStatus::Completed,
            placed: "2 minutes ago",
        },
        Order {
            id: "ORD-1040",
            store: "Hongdae",
            summary: "Cafe latte + 2 more",
            total: 32_000,
            status: OrderStatus::Completed,
            placed: "5 minutes ago",
        },
        Order {
            id: "ORD-1039",
            store: "Pangyo",
            summary: "Vanilla latte + 1 more",
            total: 28_500,
            status: OrderStatus::Pending,
            placed: "8 minutes ago",
        },
        Order {
            id: "ORD-1038",
            store: "Sinchon",
            summary: "Cold brew + 4 more",
            total: 56_000,
            status: OrderStatus::Completed,
            placed: "12 minutes ago",
        },
        Order {
            id: "ORD-1037",
            store: "Yeoksam",
            summary: "Espresso + 1 more",
            total: 19_500,
            status: OrderStatus::Cancelled,
            placed: "15 minutes ago",
        },
        Order {
            id: "ORD-1036",
            store: "Busan Seomyeon",
            summary: "Iced tea + 2 more",
            total: 24_000,
            status: OrderStatus::Completed,
            placed: "21 minutes ago",
        },
    ]
}

/// Newest orders for the dashboard panel.
pub(crate) fn recent(limit: usize) -> Vec<Order> {
    let mut list = orders();
    list.truncate(limit);
    list
}
