//! Sticky page header. Each page passes its own title; the left margin
//! tracks the effective sidebar width on desktop and disappears on
//! mobile, where a hamburger button toggles the overlay sheet instead.

use crate::features::sidebar::use_sidebar;
use leptos::prelude::*;

#[component]
pub fn Header(#[prop(optional)] title: Option<&'static str>) -> impl IntoView {
    let sidebar = use_sidebar();
    let expanded = sidebar.expanded();

    view! {
        <header
            class="sticky top-0 z-30 flex h-14 items-center justify-between border-b border-gray-200 bg-white/95 px-4 backdrop-blur transition-all dark:border-gray-800 dark:bg-gray-900/95 ml-0"
            class=("md:ml-60", move || expanded.get())
            class=("md:ml-[52px]", move || !expanded.get())
        >
            <div class="flex items-center gap-3">
                <button
                    type="button"
                    class="flex h-9 w-9 items-center justify-center rounded-md text-gray-500 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800 md:hidden"
                    aria-label="Open menu"
                    on:click=move |_| sidebar.toggle_mobile()
                >
                    <span class="material-symbols-outlined text-[20px]">"menu"</span>
                </button>
                {title
                    .map(|title| {
                        view! {
                            <h1 class="text-lg font-semibold text-gray-900 dark:text-white">
                                {title}
                            </h1>
                        }
                    })}
            </div>

            <div class="flex items-center gap-2">
                <div class="relative hidden md:block">
                    <span class="material-symbols-outlined pointer-events-none absolute left-2.5 top-2 text-[18px] text-gray-400">
                        "search"
                    </span>
                    <input
                        type="search"
                        placeholder="Search..."
                        class="h-9 w-64 rounded-md border border-gray-200 bg-gray-50 pl-9 pr-3 text-sm text-gray-900 focus:border-gray-400 focus:outline-none dark:border-gray-700 dark:bg-gray-800 dark:text-white"
                    />
                </div>

                <button
                    type="button"
                    class="relative flex h-9 w-9 items-center justify-center rounded-md text-gray-500 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800"
                    aria-label="Notifications"
                >
                    <span class="material-symbols-outlined text-[20px]">"notifications"</span>
                    <span class="absolute right-1.5 top-1.5 h-2 w-2 rounded-full bg-red-500"></span>
                </button>

                <span class="flex h-8 w-8 items-center justify-center rounded-full bg-gray-200 text-xs font-medium text-gray-700 dark:bg-gray-700 dark:text-gray-200">
                    "A"
                </span>
            </div>
        </header>
    }
}
