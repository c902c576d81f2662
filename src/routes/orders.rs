use crate::app_lib::format;
use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Badge, BadgeTone};
use crate::features::orders::fixtures;
use crate::features::orders::types::OrderStatus;
use leptos::prelude::*;

fn status_tone(status: OrderStatus) -> BadgeTone {
    match status {
        OrderStatus::Completed => BadgeTone::Success,
        OrderStatus::Pending => BadgeTone::Warning,
        OrderStatus::Cancelled => BadgeTone::Danger,
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders = fixtures::orders();
    let summary = format!("{} orders today", orders.len());

    view! {
        <Header title="Orders" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>{summary}</p>

                <div class=Theme::TABLE_WRAP>
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-800">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"Order"</th>
                                <th scope="col" class=Theme::TH>"Store"</th>
                                <th scope="col" class=Theme::TH>"Items"</th>
                                <th scope="col" class=Theme::TH>"Amount"</th>
                                <th scope="col" class=Theme::TH>"Status"</th>
                                <th scope="col" class=Theme::TH>"Placed"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-800">
                            {orders
                                .into_iter()
                                .map(|order| {
                                    view! {
                                        <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-800/50">
                                            <td class=Theme::TD_PRIMARY>{order.id}</td>
                                            <td class=Theme::TD>{order.store}</td>
                                            <td class=Theme::TD>{order.summary}</td>
                                            <td class=Theme::TD>{format::krw(order.total)}</td>
                                            <td class=Theme::TD>
                                                <Badge
                                                    tone=status_tone(order.status)
                                                    label=order.status.label()
                                                />
                                            </td>
                                            <td class=Theme::TD>{order.placed}</td>
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
