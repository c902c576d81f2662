//! Desktop navigation rail. Collapsed it shows icons only; it widens while
//! pinned open or while the pointer hovers the collapsed rail. The mobile
//! sheet reuses `NavSections`/`NavLink` so both surfaces render the same
//! registry.

use crate::app_lib::config::BrandConfig;
use crate::app_lib::GIT_COMMIT_HASH;
use crate::features::nav::{self, NavItem, BOTTOM_NAV_ITEMS, NAV_SECTIONS};
use crate::features::sidebar::use_sidebar;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = use_sidebar();
    let expanded = sidebar.expanded();
    let brand = BrandConfig::load();
    let brand_name = brand.brand_name.clone();
    let navigate = use_navigate();
    let short_sha = GIT_COMMIT_HASH.get(..7).unwrap_or(GIT_COMMIT_HASH);

    view! {
        <aside
            class="fixed left-0 top-0 z-40 hidden h-screen flex-col border-r border-gray-200 bg-white transition-all dark:border-gray-800 dark:bg-gray-900 md:flex"
            class=("w-60", move || expanded.get())
            class=("w-[52px]", move || !expanded.get())
            on:mouseenter=move |_| sidebar.set_hovered(true)
            on:mouseleave=move |_| sidebar.set_hovered(false)
        >
            // Brand header with the pin toggle.
            <div class="flex h-14 items-center justify-between px-3">
                <A
                    href=nav::DASHBOARD_ROOT
                    {..}
                    class="flex items-center gap-2 overflow-hidden"
                >
                    <img src=brand.logo_url class="h-8 w-8 shrink-0 rounded-md" alt=brand_name.clone() />
                    <Show when=move || expanded.get()>
                        <span class="truncate text-sm font-semibold text-gray-900 dark:text-white">
                            {brand_name.clone()}
                        </span>
                    </Show>
                </A>
                <Show when=move || expanded.get()>
                    <button
                        type="button"
                        class="flex h-7 w-7 shrink-0 items-center justify-center rounded-md text-gray-500 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800"
                        aria-label="Collapse sidebar"
                        on:click=move |_| sidebar.toggle()
                    >
                        <span class="material-symbols-outlined text-[18px]">"chevron_left"</span>
                    </button>
                </Show>
            </div>

            <hr class="border-gray-100 dark:border-gray-800" />

            <NavSections expanded=expanded />

            <hr class="border-gray-100 dark:border-gray-800" />

            // Always-visible bottom group.
            <div class="px-2 py-2">
                <ul class="space-y-1">
                    {BOTTOM_NAV_ITEMS
                        .iter()
                        .map(|item| view! { <NavLink item=*item expanded=expanded /> })
                        .collect_view()}
                </ul>
            </div>

            <hr class="border-gray-100 dark:border-gray-800" />

            // Signed-in admin row; the demo flow just returns to the login page.
            <div class="p-2">
                <button
                    type="button"
                    class="flex w-full items-center gap-2 rounded-md px-2 py-1.5 text-sm text-gray-700 transition-colors hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800"
                    class=("justify-center", move || !expanded.get())
                    on:click=move |_| navigate(paths::LOGIN, Default::default())
                >
                    <span class="flex h-6 w-6 shrink-0 items-center justify-center rounded-full bg-gray-200 text-xs font-medium text-gray-700 dark:bg-gray-700 dark:text-gray-200">
                        "A"
                    </span>
                    <Show when=move || expanded.get()>
                        <span class="flex flex-1 items-center justify-between overflow-hidden">
                            <span class="truncate text-sm font-medium">"Administrator"</span>
                            <span class="material-symbols-outlined shrink-0 text-[18px] text-gray-400">
                                "logout"
                            </span>
                        </span>
                    </Show>
                </button>
            </div>

            // Expand affordance while collapsed; build tag while expanded.
            <div class="p-2">
                <Show
                    when=move || expanded.get()
                    fallback=move || {
                        view! {
                            <button
                                type="button"
                                class="flex h-8 w-8 items-center justify-center rounded-md text-gray-500 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800"
                                aria-label="Expand sidebar"
                                on:click=move |_| sidebar.toggle()
                            >
                                <span class="material-symbols-outlined text-[18px]">
                                    "chevron_right"
                                </span>
                            </button>
                        }
                    }
                >
                    <p class="px-2 pb-1 font-mono text-[10px] uppercase tracking-tighter text-gray-400">
                        {format!("build {short_sha}")}
                    </p>
                </Show>
            </div>
        </aside>
    }
}

/// Renders the grouped nav registry. Section labels show while expanded;
/// the collapsed rail separates groups with a rule instead.
#[component]
pub fn NavSections(
    #[prop(into)] expanded: Signal<bool>,
    #[prop(optional_no_strip)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <nav class="flex-1 overflow-y-auto px-2 py-2">
            {NAV_SECTIONS
                .iter()
                .map(|section| {
                    let label = section.label;
                    view! {
                        {label
                            .map(|label| {
                                view! {
                                    <Show
                                        when=move || expanded.get()
                                        fallback=|| {
                                            view! {
                                                <hr class="my-2 border-gray-100 dark:border-gray-800" />
                                            }
                                        }
                                    >
                                        <div class="mb-2 mt-4 px-2">
                                            <span class="text-xs font-medium text-gray-500 dark:text-gray-400">
                                                {label}
                                            </span>
                                        </div>
                                    </Show>
                                }
                            })}
                        <ul class="space-y-1">
                            {section
                                .items
                                .iter()
                                .map(|item| {
                                    view! {
                                        <NavLink item=*item expanded=expanded on_select=on_select />
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// One registry entry. Exactly the entry whose target matches the current
/// location is highlighted; the label collapses away with the rail.
#[component]
pub fn NavLink(
    item: NavItem,
    #[prop(into)] expanded: Signal<bool>,
    #[prop(optional_no_strip)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| nav::is_active(&location.pathname.get(), item.href));

    view! {
        <li>
            <A
                href=item.href
                {..}
                class=move || {
                    let mut class = String::from(
                        "flex items-center gap-2 rounded-md px-2 py-1.5 text-sm transition-colors hover:bg-gray-100 dark:hover:bg-gray-800",
                    );
                    if active.get() {
                        class.push_str(" bg-gray-100 font-medium text-gray-900 dark:bg-gray-800 dark:text-white");
                    } else {
                        class.push_str(" text-gray-600 dark:text-gray-400");
                    }
                    if !expanded.get() {
                        class.push_str(" justify-center");
                    }
                    class
                }
                on:click=move |_| {
                    if let Some(on_select) = on_select {
                        on_select.run(());
                    }
                }
            >
                <span class="material-symbols-outlined shrink-0 text-[18px]">{item.icon}</span>
                <Show when=move || expanded.get()>
                    <span class="truncate">{item.title}</span>
                </Show>
            </A>
        </li>
    }
}
