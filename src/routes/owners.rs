use crate::app_lib::format;
use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::features::owners;
use leptos::prelude::*;

#[component]
pub fn OwnersPage() -> impl IntoView {
    let owners = owners::owners();
    let summary = format!("{} registered franchise owners", owners.len());

    view! {
        <Header title="Owners" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>{summary}</p>

                <div class=Theme::TABLE_WRAP>
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-800">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"Name"</th>
                                <th scope="col" class=Theme::TH>"Email"</th>
                                <th scope="col" class=Theme::TH>"Phone"</th>
                                <th scope="col" class=Theme::TH>"Stores"</th>
                                <th scope="col" class=Theme::TH>"Joined"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-800">
                            {owners
                                .into_iter()
                                .map(|owner| {
                                    view! {
                                        <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-800/50">
                                            <td class=Theme::TD_PRIMARY>{owner.name}</td>
                                            <td class=Theme::TD>{owner.email}</td>
                                            <td class=Theme::TD>{owner.phone}</td>
                                            <td class=Theme::TD>{owner.store_count}</td>
                                            <td class=Theme::TD>{format::short_date(owner.joined)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </MainContent>
    }
}
