use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ButtonVariant {
    /// Full-width filled button, the form primary action.
    #[default]
    Solid,
    /// Inline bordered button for secondary actions.
    Outline,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Solid => {
                "w-full bg-gray-900 px-4 py-2.5 text-white hover:bg-gray-700 focus:ring-gray-400 dark:bg-gray-100 dark:text-gray-900 dark:hover:bg-gray-300"
            }
            ButtonVariant::Outline => {
                "border border-gray-300 bg-transparent px-3 py-2 text-gray-700 hover:bg-gray-100 focus:ring-gray-300 dark:border-gray-700 dark:text-gray-300 dark:hover:bg-gray-800"
            }
        }
    }
}

/// Shared button. While `pending` it shows an inline spinner and refuses
/// input, so callers never race a dispatched action.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] pending: Signal<bool>,
    #[prop(optional_no_strip)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let inactive = Signal::derive(move || disabled.get() || pending.get());
    let class = format!(
        "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium transition-colors focus:outline-none focus:ring-2 {}",
        variant.classes()
    );

    view! {
        <button
            type=button_type
            class=class
            class:cursor-not-allowed=move || inactive.get()
            class:opacity-70=move || inactive.get()
            disabled=move || inactive.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <Show when=move || pending.get()>
                <span
                    class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"
                    role="status"
                    aria-label="Loading"
                ></span>
            </Show>
            {children()}
        </button>
    }
}
