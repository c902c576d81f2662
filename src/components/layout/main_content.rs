//! Main content region. Applies exactly one of the two desktop offsets
//! published by the sidebar context; mobile gets no offset at all.

use crate::features::sidebar::use_sidebar;
use leptos::prelude::*;

#[component]
pub fn MainContent(children: Children) -> impl IntoView {
    let sidebar = use_sidebar();
    let expanded = sidebar.expanded();

    view! {
        <main
            class="min-h-[calc(100vh-3.5rem)] ml-0 transition-all"
            class=("md:ml-60", move || expanded.get())
            class=("md:ml-[52px]", move || !expanded.get())
        >
            <div class="px-4 py-4 md:p-6">{children()}</div>
        </main>
    }
}
