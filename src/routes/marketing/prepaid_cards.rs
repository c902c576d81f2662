use crate::app_lib::format;
use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Badge, BadgeTone};
use crate::features::marketing::fixtures;
use crate::features::marketing::types::CardStatus;
use leptos::prelude::*;

#[component]
pub fn PrepaidCardsPage() -> impl IntoView {
    let cards = fixtures::prepaid_cards();

    view! {
        <Header title="Payments" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>"Prepaid cards issued to customers."</p>

                <div class=Theme::TABLE_WRAP>
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-800">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"Card"</th>
                                <th scope="col" class=Theme::TH>"Holder"</th>
                                <th scope="col" class=Theme::TH>"Balance"</th>
                                <th scope="col" class=Theme::TH>"Issued"</th>
                                <th scope="col" class=Theme::TH>"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-800">
                            {cards
                                .into_iter()
                                .map(|card| {
                                    let tone = match card.status {
                                        CardStatus::Active => BadgeTone::Success,
                                        CardStatus::Suspended => BadgeTone::Danger,
                                    };
                                    view! {
                                        <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-800/50">
                                            <td class="px-6 py-4 whitespace-nowrap font-mono text-sm text-gray-900 dark:text-white">
                                                {card.number}
                                            </td>
                                            <td class=Theme::TD>{card.holder}</td>
                                            <td class=Theme::TD>{format::krw(card.balance)}</td>
                                            <td class=Theme::TD>{format::short_date(card.issued)}</td>
                                            <td class=Theme::TD>
                                                <Badge tone=tone label=card.status.label() />
                                            </td>
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
