//! Layout components for the dashboard subtree. The desktop rail, the
//! mobile sheet, the header, and the content region all observe the same
//! sidebar context; pages compose `Header` and `MainContent` themselves
//! because each page supplies its own title.

mod dashboard_layout;
mod header;
mod main_content;
mod mobile_sidebar;
mod sidebar;

pub(crate) use dashboard_layout::DashboardLayout;
pub(crate) use header::Header;
pub(crate) use main_content::MainContent;
pub(crate) use mobile_sidebar::MobileSidebar;
pub(crate) use sidebar::{NavLink, NavSections, Sidebar};
