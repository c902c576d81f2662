use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Panel container used across the dashboard screens.
#[component]
pub fn Card(#[prop(optional)] title: Option<&'static str>, children: Children) -> impl IntoView {
    view! {
        <div class=Theme::CARD>
            {title
                .map(|title| {
                    view! {
                        <div class="border-b border-gray-100 px-6 py-4 dark:border-gray-800">
                            <h3 class="text-base font-semibold text-gray-900 dark:text-white">
                                {title}
                            </h3>
                        </div>
                    }
                })}
            <div class="p-6">{children()}</div>
        </div>
    }
}
