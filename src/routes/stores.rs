use crate::app_lib::format;
use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Badge, BadgeTone};
use crate::features::stores::fixtures;
use crate::features::stores::types::StoreStatus;
use leptos::prelude::*;

fn status_tone(status: StoreStatus) -> BadgeTone {
    match status {
        StoreStatus::Active => BadgeTone::Success,
        StoreStatus::Pending => BadgeTone::Warning,
        StoreStatus::Inactive => BadgeTone::Neutral,
    }
}

#[component]
pub fn StoresPage() -> impl IntoView {
    let stores = fixtures::stores();
    let summary = format!("{} stores across all brands", stores.len());

    view! {
        <Header title="Stores" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>{summary}</p>

                <div class=Theme::TABLE_WRAP>
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-800">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"Store"</th>
                                <th scope="col" class=Theme::TH>"Address"</th>
                                <th scope="col" class=Theme::TH>"Owner"</th>
                                <th scope="col" class=Theme::TH>"Status"</th>
                                <th scope="col" class=Theme::TH>"Opened"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-800">
                            {stores
                                .into_iter()
                                .map(|store| {
                                    view! {
                                        <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-800/50">
                                            <td class=Theme::TD_PRIMARY>{store.name}</td>
                                            <td class=Theme::TD>{store.address}</td>
                                            <td class=Theme::TD>{store.owner}</td>
                                            <td class=Theme::TD>
                                                <Badge
                                                    tone=status_tone(store.status)
                                                    label=store.status.label()
                                                />
                                            </td>
                                            <td class=Theme::TD>{format::short_date(store.opened)}</td>
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
