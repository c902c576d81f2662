//! Mobile overlay sheet. Mounted only while `mobile_open`; both the
//! backdrop and navigating anywhere close it. The sheet always renders
//! the expanded form of the registry and ignores desktop pin state.

use crate::app_lib::config::BrandConfig;
use crate::components::layout::{NavLink, NavSections};
use crate::features::nav::{self, BOTTOM_NAV_ITEMS};
use crate::features::sidebar::use_sidebar;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn MobileSidebar() -> impl IntoView {
    let sidebar = use_sidebar();
    let brand = BrandConfig::load();
    let brand_name = brand.brand_name.clone();
    let close = Callback::new(move |()| sidebar.close_mobile());

    view! {
        <Show when=move || sidebar.is_mobile_open().get()>
            <div
                class="fixed inset-0 z-40 bg-black/50 md:hidden"
                on:click=move |_| sidebar.close_mobile()
            ></div>
            <aside class="fixed left-0 top-0 z-50 flex h-screen w-60 flex-col border-r border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900 md:hidden">
                <div class="flex h-14 items-center justify-between px-3">
                    <A
                        href=nav::DASHBOARD_ROOT
                        {..}
                        class="flex items-center gap-2 overflow-hidden"
                        on:click=move |_| sidebar.close_mobile()
                    >
                        <img
                            src=brand.logo_url.clone()
                            class="h-8 w-8 shrink-0 rounded-md"
                            alt=brand_name.clone()
                        />
                        <span class="truncate text-sm font-semibold text-gray-900 dark:text-white">
                            {brand_name.clone()}
                        </span>
                    </A>
                    <button
                        type="button"
                        class="flex h-7 w-7 shrink-0 items-center justify-center rounded-md text-gray-500 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800"
                        aria-label="Close menu"
                        on:click=move |_| sidebar.close_mobile()
                    >
                        <span class="material-symbols-outlined text-[18px]">"close"</span>
                    </button>
                </div>

                <hr class="border-gray-100 dark:border-gray-800" />

                <NavSections expanded=true on_select=Some(close) />

                <hr class="border-gray-100 dark:border-gray-800" />

                <div class="px-2 py-2">
                    <ul class="space-y-1">
                        {BOTTOM_NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <NavLink item=*item expanded=true on_select=Some(close) />
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </aside>
        </Show>
    }
}
