use leptos::prelude::*;

/// Visual tone for status badges; screens map their status enums onto it.
#[derive(Clone, Copy)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Neutral,
    Info,
}

#[component]
pub fn Badge(tone: BadgeTone, label: &'static str) -> impl IntoView {
    let class = match tone {
        BadgeTone::Success => {
            "inline-flex items-center rounded-full bg-green-100 px-2.5 py-0.5 text-xs font-medium text-green-700 dark:bg-green-900/40 dark:text-green-300"
        }
        BadgeTone::Warning => {
            "inline-flex items-center rounded-full bg-amber-100 px-2.5 py-0.5 text-xs font-medium text-amber-700 dark:bg-amber-900/40 dark:text-amber-300"
        }
        BadgeTone::Danger => {
            "inline-flex items-center rounded-full bg-red-100 px-2.5 py-0.5 text-xs font-medium text-red-700 dark:bg-red-900/40 dark:text-red-300"
        }
        BadgeTone::Neutral => {
            "inline-flex items-center rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-600 dark:bg-gray-800 dark:text-gray-300"
        }
        BadgeTone::Info => {
            "inline-flex items-center rounded-full bg-blue-100 px-2.5 py-0.5 text-xs font-medium text-blue-700 dark:bg-blue-900/40 dark:text-blue-300"
        }
    };

    view! { <span class=class>{label}</span> }
}
