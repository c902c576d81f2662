//! Store records and the fixture slice behind the stores screen.

pub(crate) mod fixtures;
pub(crate) mod types;
