mod admins;
mod analytics;
mod brands;
mod contents;
mod dashboard;
mod inquiries;
mod login;
mod marketing;
mod not_found;
mod notifications;
mod orders;
mod owners;
mod settings;
mod stores;

pub(crate) use admins::AdminsPage;
pub(crate) use analytics::AnalyticsPage;
pub(crate) use brands::BrandsPage;
pub(crate) use contents::ContentsPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use inquiries::InquiriesPage;
pub(crate) use login::LoginPage;
pub(crate) use marketing::{CampaignsPage, CouponsPage, PrepaidCardsPage};
pub(crate) use not_found::NotFoundPage;
pub(crate) use notifications::NotificationsPage;
pub(crate) use orders::OrdersPage;
pub(crate) use owners::OwnersPage;
pub(crate) use settings::SettingsPage;
pub(crate) use stores::StoresPage;

use crate::components::layout::DashboardLayout;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Routes};
use leptos_router::path;

/// Route constants shared by navigation code.
pub(crate) mod paths {
    pub const DASHBOARD: &str = "/dashboard";
    pub const LOGIN: &str = "/login";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <Redirect path=paths::DASHBOARD /> } />
            <Route path=path!("/login") view=LoginPage />
            <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                <Route path=path!("") view=DashboardPage />
                <Route path=path!("brands") view=BrandsPage />
                <Route path=path!("stores") view=StoresPage />
                <Route path=path!("owners") view=OwnersPage />
                <Route path=path!("orders") view=OrdersPage />
                <Route path=path!("analytics") view=AnalyticsPage />
                <Route path=path!("contents") view=ContentsPage />
                <Route path=path!("marketing/campaigns") view=CampaignsPage />
                <Route path=path!("marketing/coupons") view=CouponsPage />
                <Route path=path!("marketing/prepaid-cards") view=PrepaidCardsPage />
                <Route path=path!("admins") view=AdminsPage />
                <Route path=path!("inquiries") view=InquiriesPage />
                <Route path=path!("notifications") view=NotificationsPage />
                <Route path=path!("settings") view=SettingsPage />
            </ParentRoute>
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
