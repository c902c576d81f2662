use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreStatus {
    Active,
    Inactive,
    Pending,
}

impl StoreStatus {
    pub fn label(self) -> &'static str {
        match self {
            StoreStatus::Active => "Active",
            StoreStatus::Inactive => "Inactive",
            StoreStatus::Pending => "Pending",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Store {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub owner: &'static str,
    pub status: StoreStatus,
    pub opened: NaiveDate,
}
