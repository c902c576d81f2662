use crate::app_lib::format;
use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::features::analytics;
use leptos::prelude::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let months = analytics::monthly_revenue();

    view! {
        <Header title="Analytics" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>
                    "Monthly revenue across all brands. Interactive charts arrive with the reporting backend."
                </p>

                <div class=Theme::TABLE_WRAP>
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-800">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"Month"</th>
                                <th scope="col" class=Theme::TH>"Revenue"</th>
                                <th scope="col" class=Theme::TH>"Orders"</th>
                                <th scope="col" class=Theme::TH>"Change"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-800">
                            {months
                                .into_iter()
                                .map(|month| {
                                    let delta_class = if month.delta >= 0 {
                                        "text-sm text-green-600"
                                    } else {
                                        "text-sm text-red-600"
                                    };
                                    let delta = format!("{:+}%", month.delta);
                                    view! {
                                        <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-800/50">
                                            <td class=Theme::TD_PRIMARY>{month.month}</td>
                                            <td class=Theme::TD>{format::krw(month.revenue)}</td>
                                            <td class=Theme::TD>{month.orders}</td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <span class=delta_class>{delta}</span>
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
