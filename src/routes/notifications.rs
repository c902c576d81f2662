use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::features::notifications;
use leptos::prelude::*;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let notifications = notifications::notifications();
    let unread = notifications.iter().filter(|item| item.unread).count();

    view! {
        <Header title="Notifications" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>{format!("{unread} unread notifications")}</p>

                <div class=Theme::CARD>
                    <ul class="divide-y divide-gray-100 dark:divide-gray-800">
                        {notifications
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="flex items-start gap-3 px-6 py-4">
                                        <span
                                            class="mt-1.5 h-2 w-2 shrink-0 rounded-full"
                                            class=("bg-blue-500", item.unread)
                                            class=("bg-transparent", !item.unread)
                                        ></span>
                                        <div class="min-w-0 flex-1">
                                            <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                {item.title}
                                            </p>
                                            <p class="text-sm text-gray-600 dark:text-gray-300">
                                                {item.body}
                                            </p>
                                            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                                                {item.time}
                                            </p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </MainContent>
    }
}
