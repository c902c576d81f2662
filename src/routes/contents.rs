use crate::app_lib::format;
use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Badge, BadgeTone};
use crate::features::contents::{self, PublishStatus};
use leptos::prelude::*;

#[component]
pub fn ContentsPage() -> impl IntoView {
    let posts = contents::posts();

    view! {
        <Header title="Contents" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>"Announcements and stories shown in the owner app."</p>

                <div class="grid gap-4 md:grid-cols-2">
                    {posts
                        .into_iter()
                        .map(|post| {
                            let tone = match post.status {
                                PublishStatus::Published => BadgeTone::Success,
                                PublishStatus::Draft => BadgeTone::Neutral,
                            };
                            let published = post
                                .published
                                .map(format::short_date)
                                .unwrap_or_else(|| "Not published".to_string());
                            view! {
                                <div class=Theme::CARD>
                                    <div class="space-y-3 p-6">
                                        <div class="flex items-start justify-between gap-2">
                                            <h3 class="text-sm font-semibold text-gray-900 dark:text-white">
                                                {post.title}
                                            </h3>
                                            <Badge tone=tone label=post.status.label() />
                                        </div>
                                        <p class="text-xs text-gray-500 dark:text-gray-400">
                                            {format!("{} · {}", post.category, published)}
                                        </p>
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
