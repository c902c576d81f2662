//! Order records shared by the orders screen and the dashboard lists.

pub(crate) mod fixtures;
pub(crate) mod types;
