//! Layout wrapper for the dashboard subtree. Provides the shared sidebar
//! context and mounts both navigation surfaces around the routed page.

use crate::components::layout::{MobileSidebar, Sidebar};
use crate::features::sidebar::SidebarProvider;
use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <SidebarProvider>
            <div class="min-h-screen bg-gray-50 dark:bg-gray-950">
                <Sidebar />
                <MobileSidebar />
                <Outlet />
            </div>
        </SidebarProvider>
    }
}
