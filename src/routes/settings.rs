use crate::app_lib::config::BrandConfig;
use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Button, ButtonVariant, Card};
use crate::features::sidebar::use_sidebar;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let brand = BrandConfig::load();
    let sidebar = use_sidebar();
    let pinned = sidebar.is_open();
    let navigate = use_navigate();
    let sign_out = Callback::new(move |()| navigate(paths::LOGIN, Default::default()));

    view! {
        <Header title="Settings" />
        <MainContent>
            <div class="max-w-2xl space-y-6">
                <Card title="Brand profile">
                    <dl class="space-y-4">
                        <div>
                            <dt class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                "Brand name"
                            </dt>
                            <dd class="mt-1 text-sm text-gray-900 dark:text-white">
                                {brand.brand_name.clone()}
                            </dd>
                        </div>
                        <div>
                            <dt class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                "Brand code"
                            </dt>
                            <dd class="mt-1 font-mono text-sm text-gray-900 dark:text-white">
                                {brand.brand_code.clone()}
                            </dd>
                        </div>
                        <div>
                            <dt class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                "Support email"
                            </dt>
                            <dd class="mt-1 text-sm text-gray-900 dark:text-white">
                                {brand.support_email.clone()}
                            </dd>
                        </div>
                    </dl>
                    <p class="mt-4 text-xs text-gray-500 dark:text-gray-400">
                        "Branding is set per deployment; contact the platform team to change it."
                    </p>
                </Card>

                <Card title="Preferences">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-sm font-medium text-gray-900 dark:text-white">
                                "Keep sidebar expanded"
                            </p>
                            <p class=Theme::PAGE_DESC>
                                "Saved on this device and restored on your next visit."
                            </p>
                        </div>
                        <button
                            type="button"
                            class="relative inline-flex h-6 w-11 shrink-0 items-center rounded-full transition-colors"
                            class=("bg-gray-900", move || pinned.get())
                            class=("dark:bg-gray-100", move || pinned.get())
                            class=("bg-gray-300", move || !pinned.get())
                            class=("dark:bg-gray-700", move || !pinned.get())
                            role="switch"
                            aria-checked=move || pinned.get().to_string()
                            on:click=move |_| sidebar.toggle()
                        >
                            <span
                                class="inline-block h-4 w-4 transform rounded-full bg-white transition-transform dark:bg-gray-900"
                                class=("translate-x-6", move || pinned.get())
                                class=("translate-x-1", move || !pinned.get())
                            ></span>
                        </button>
                    </div>
                </Card>

                <Card title="Session">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-sm font-medium text-gray-900 dark:text-white">
                                "Sign out"
                            </p>
                            <p class=Theme::PAGE_DESC>
                                "Ends this session and returns to the login screen."
                            </p>
                        </div>
                        <Button variant=ButtonVariant::Outline on_click=Some(sign_out)>
                            <span class="material-symbols-outlined text-[18px]">"logout"</span>
                            "Sign out"
                        </Button>
                    </div>
                </Card>
            </div>
        </MainContent>
    }
}
