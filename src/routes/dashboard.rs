//! Dashboard home: headline stats plus the latest orders and the
//! top-grossing stores.

use crate::app_lib::format;
use crate::app_lib::theme::Theme;
use crate::components::Card;
use crate::components::layout::{Header, MainContent};
use crate::features::dashboard::{self, StatCard, Trend};
use crate::features::orders::fixtures as order_fixtures;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = dashboard::stats();
    let recent_orders = order_fixtures::recent(5);
    let top_stores = dashboard::top_stores();

    view! {
        <Header title="Dashboard" />
        <MainContent>
            <div class="mb-8">
                <h2 class="text-2xl font-semibold tracking-tight text-gray-900 dark:text-white">
                    "Welcome back 👋"
                </h2>
                <p class=Theme::PAGE_DESC>"Here is how your stores are doing today."</p>
            </div>

            <div class="mb-8 grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                {stats.into_iter().map(stat_card).collect_view()}
            </div>

            <div class="grid gap-6 lg:grid-cols-2">
                <Card title="Recent orders">
                    <div class="space-y-4">
                        {recent_orders
                            .into_iter()
                            .map(|order| {
                                view! {
                                    <div class="flex items-center justify-between">
                                        <div class="flex items-center gap-3">
                                            <span class="flex h-9 w-9 items-center justify-center rounded-full bg-gray-100 dark:bg-gray-800">
                                                <span class="material-symbols-outlined text-[18px] text-gray-500">
                                                    "shopping_cart"
                                                </span>
                                            </span>
                                            <div>
                                                <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                    {order.store}
                                                </p>
                                                <p class="text-xs text-gray-500 dark:text-gray-400">
                                                    {order.summary}
                                                </p>
                                            </div>
                                        </div>
                                        <div class="text-right">
                                            <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                {format::krw(order.total)}
                                            </p>
                                            <p class="text-xs text-gray-500 dark:text-gray-400">
                                                {order.placed}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>

                <Card title="Top stores by revenue">
                    <div class="space-y-4">
                        {top_stores
                            .into_iter()
                            .enumerate()
                            .map(|(index, store)| {
                                view! {
                                    <div class="flex items-center justify-between">
                                        <div class="flex items-center gap-3">
                                            <span class="flex h-9 w-9 items-center justify-center rounded-full bg-gray-100 text-sm font-medium text-gray-700 dark:bg-gray-800 dark:text-gray-200">
                                                {index + 1}
                                            </span>
                                            <div>
                                                <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                    {store.name}
                                                </p>
                                                <p class="text-xs text-gray-500 dark:text-gray-400">
                                                    {format!("{} orders", store.orders)}
                                                </p>
                                            </div>
                                        </div>
                                        <div class="text-right">
                                            <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                {format::krw(store.revenue)}
                                            </p>
                                            <p class="text-xs text-green-600">{store.growth}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </MainContent>
    }
}

fn stat_card(stat: StatCard) -> impl IntoView {
    let (trend_class, trend_icon) = match stat.trend {
        Trend::Up => ("flex items-center text-green-600", "arrow_upward"),
        Trend::Down => ("flex items-center text-red-600", "arrow_downward"),
    };

    view! {
        <div class=Theme::CARD>
            <div class="p-6">
                <div class="flex items-center justify-between pb-2">
                    <p class="text-sm font-medium text-gray-500 dark:text-gray-400">{stat.title}</p>
                </div>
                <div class="text-2xl font-bold text-gray-900 dark:text-white">{stat.value}</div>
                <div class="flex items-center text-xs">
                    <span class=trend_class>
                        <span class="material-symbols-outlined mr-0.5 text-[14px]">
                            {trend_icon}
                        </span>
                        {stat.change}
                    </span>
                    <span class="ml-1 text-gray-500 dark:text-gray-400">{stat.basis}</span>
                </div>
            </div>
        </div>
    }
}
