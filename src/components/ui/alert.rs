//! Inline alert banners for form feedback.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-md bg-red-50 px-3 py-2.5 text-sm text-red-600 dark:bg-red-900/20 dark:text-red-300"
        }
        AlertKind::Info => {
            "rounded-md bg-blue-50 px-3 py-2.5 text-sm text-blue-600 dark:bg-blue-900/20 dark:text-blue-300"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
