//! Minimal 404 page for unknown routes.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center px-4 text-center">
            <div class="relative">
                <h1 class="select-none text-9xl font-black text-gray-100 dark:text-gray-800">
                    "404"
                </h1>
                <p class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 whitespace-nowrap text-2xl font-bold text-gray-900 dark:text-white">
                    "Page not found"
                </p>
            </div>
            <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                "The page you are looking for does not exist or has moved."
            </p>
            <A
                href=paths::DASHBOARD
                {..}
                class="mt-6 inline-flex items-center gap-2 rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white hover:bg-gray-700 dark:bg-gray-100 dark:text-gray-900 dark:hover:bg-gray-300"
            >
                <span class="material-symbols-outlined text-[18px]">"arrow_back"</span>
                "Back to dashboard"
            </A>
        </div>
    }
}
