//! Domain-level frontend features. Navigation and sidebar state are the
//! stateful core; the remaining modules hold the record types and static
//! fixture slices the dashboard screens render until a backend exists.

pub(crate) mod admins;
pub(crate) mod analytics;
pub(crate) mod auth;
pub(crate) mod brands;
pub(crate) mod contents;
pub(crate) mod dashboard;
pub(crate) mod inquiries;
pub(crate) mod marketing;
pub(crate) mod nav;
pub(crate) mod notifications;
pub(crate) mod orders;
pub(crate) mod owners;
pub(crate) mod sidebar;
pub(crate) mod stores;
