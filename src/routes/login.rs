//! Demo login screen: split branding panel plus the credential form. The
//! submit flow validates locally, waits the simulated round-trip, and
//! redirects to the dashboard; any non-empty credentials are accepted.

use crate::app_lib::config::BrandConfig;
use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button};
use crate::features::auth::client;
use crate::features::auth::types::Credentials;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let brand = BrandConfig::load();
    let brand_name = brand.brand_name.clone();
    let navigate = use_navigate();
    let (brand_code, set_brand_code) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move { client::login(&credentials).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => navigate(paths::DASHBOARD, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        login_action.dispatch(Credentials {
            brand_code: brand_code.get_untracked(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div class="flex min-h-screen bg-white dark:bg-gray-950">
            // Branding panel, desktop only.
            <div class="hidden bg-gradient-to-br from-gray-50 to-gray-100 p-12 dark:from-gray-900 dark:to-gray-950 lg:flex lg:w-1/2 lg:flex-col lg:justify-between">
                <div class="flex items-center gap-3">
                    <img src=brand.logo_url.clone() class="h-12 w-12 rounded-lg" alt=brand_name.clone() />
                    <span class="text-xl font-semibold text-gray-900 dark:text-white">
                        {brand_name.clone()}
                    </span>
                </div>

                <div class="space-y-6">
                    <h1 class="text-4xl font-bold leading-tight text-gray-900 dark:text-white">
                        "Smarter brand"
                        <br />
                        "management"
                    </h1>
                    <p class="text-lg text-gray-600 dark:text-gray-300">
                        "Owner apps, order analytics, and content: "
                        <br />
                        "run every brand from one dashboard."
                    </p>
                    <div class="flex items-center gap-2 text-sm text-gray-500 dark:text-gray-400">
                        <span class="material-symbols-outlined text-[18px]">"apartment"</span>
                        <span>"One admin console for every franchise brand"</span>
                    </div>
                </div>

                <p class="text-sm text-gray-400">"© 2026 Sobok. All rights reserved."</p>
            </div>

            // Login form.
            <div class="flex w-full flex-col justify-center px-8 lg:w-1/2 lg:px-16">
                <div class="mx-auto w-full max-w-sm">
                    <div class="mb-8 text-center lg:text-left">
                        <h2 class="text-2xl font-semibold tracking-tight text-gray-900 dark:text-white">
                            "Sign in"
                        </h2>
                        <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                            "Enter your brand code and account details"
                        </p>
                    </div>

                    <form class="space-y-4" on:submit=on_submit>
                        {move || {
                            error
                                .get()
                                .map(|err| {
                                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                })
                        }}

                        <div class="space-y-2">
                            <label
                                class="text-sm font-medium text-gray-900 dark:text-white"
                                for="brand-code"
                            >
                                "Brand code"
                            </label>
                            <input
                                id="brand-code"
                                type="text"
                                class=Theme::INPUT
                                style="text-transform: uppercase"
                                placeholder="e.g. BRAND001"
                                prop:value=brand_code
                                disabled=move || login_action.pending().get()
                                on:input=move |event| {
                                    set_brand_code.set(event_target_value(&event).to_uppercase())
                                }
                            />
                            <p class="text-xs text-gray-500 dark:text-gray-400">
                                "Use the code issued by your brand administrator"
                            </p>
                        </div>

                        <div class="space-y-2">
                            <label
                                class="text-sm font-medium text-gray-900 dark:text-white"
                                for="email"
                            >
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                class=Theme::INPUT
                                autocomplete="email"
                                placeholder="admin@example.com"
                                disabled=move || login_action.pending().get()
                                on:input=move |event| set_email.set(event_target_value(&event))
                            />
                        </div>

                        <div class="space-y-2">
                            <label
                                class="text-sm font-medium text-gray-900 dark:text-white"
                                for="password"
                            >
                                "Password"
                            </label>
                            <div class="relative">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    class=Theme::INPUT
                                    autocomplete="current-password"
                                    placeholder="••••••••"
                                    disabled=move || login_action.pending().get()
                                    on:input=move |event| set_password.set(event_target_value(&event))
                                />
                                <button
                                    type="button"
                                    class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                                    aria-label="Toggle password visibility"
                                    on:click=move |_| set_show_password.update(|show| *show = !*show)
                                >
                                    <span class="material-symbols-outlined text-[18px]">
                                        {move || {
                                            if show_password.get() { "visibility_off" } else { "visibility" }
                                        }}
                                    </span>
                                </button>
                            </div>
                        </div>

                        <Button button_type="submit" pending=login_action.pending()>
                            {move || {
                                if login_action.pending().get() {
                                    "Signing in..."
                                } else {
                                    "Sign in"
                                }
                            }}
                        </Button>
                    </form>

                    <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                        "No account? Contact your platform administrator."
                    </p>
                </div>
            </div>
        </div>
    }
}
