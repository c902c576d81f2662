use crate::app_lib::format;
use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Badge, BadgeTone};
use crate::features::marketing::fixtures;
use crate::features::marketing::types::CampaignStatus;
use leptos::prelude::*;

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let campaigns = fixtures::campaigns();

    view! {
        <Header title="Campaigns" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>"Push and in-app campaigns across all brands."</p>

                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                    {campaigns
                        .into_iter()
                        .map(|campaign| {
                            let tone = match campaign.status {
                                CampaignStatus::Running => BadgeTone::Success,
                                CampaignStatus::Scheduled => BadgeTone::Info,
                                CampaignStatus::Ended => BadgeTone::Neutral,
                            };
                            let period = format!(
                                "{} – {}",
                                format::short_date(campaign.starts),
                                format::short_date(campaign.ends)
                            );
                            view! {
                                <div class=Theme::CARD>
                                    <div class="space-y-3 p-6">
                                        <div class="flex items-start justify-between gap-2">
                                            <h3 class="text-sm font-semibold text-gray-900 dark:text-white">
                                                {campaign.name}
                                            </h3>
                                            <Badge tone=tone label=campaign.status.label() />
                                        </div>
                                        <p class="text-xs text-gray-500 dark:text-gray-400">{period}</p>
                                        <p class="text-sm text-gray-600 dark:text-gray-300">
                                            {campaign.channel}
                                        </p>
                                        <p class="text-xs text-gray-500 dark:text-gray-400">
                                            {format!("Reach: {}", campaign.reach)}
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
