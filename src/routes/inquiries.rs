use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Badge, BadgeTone};
use crate::features::inquiries::{self, InquiryStatus};
use leptos::prelude::*;

#[component]
pub fn InquiriesPage() -> impl IntoView {
    let inquiries = inquiries::inquiries();

    view! {
        <Header title="Inquiries" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>"Support requests from store owners."</p>

                <div class="space-y-3">
                    {inquiries
                        .into_iter()
                        .map(|inquiry| {
                            let tone = match inquiry.status {
                                InquiryStatus::Open => BadgeTone::Warning,
                                InquiryStatus::Answered => BadgeTone::Info,
                                InquiryStatus::Closed => BadgeTone::Neutral,
                            };
                            view! {
                                <div class=Theme::CARD>
                                    <div class="flex items-center justify-between gap-4 p-4">
                                        <div class="min-w-0">
                                            <p class="truncate text-sm font-medium text-gray-900 dark:text-white">
                                                {inquiry.subject}
                                            </p>
                                            <p class="text-xs text-gray-500 dark:text-gray-400">
                                                {format!("{} · {}", inquiry.store, inquiry.created)}
                                            </p>
                                        </div>
                                        <Badge tone=tone label=inquiry.status.label() />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </MainContent>
    }
}
