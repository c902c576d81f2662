#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Order {
    pub id: &'static str,
    pub store: &'static str,
    /// Line-item summary, e.g. "Americano + 3 more".
    pub summary: &'static str,
    /// Total in won.
    pub total: u64,
    pub status: OrderStatus,
    /// Relative time label as the ordering service reports it.
    pub placed: &'static str,
}
