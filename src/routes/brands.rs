use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Badge, BadgeTone};
use crate::features::brands::{self, BrandStatus};
use leptos::prelude::*;

#[component]
pub fn BrandsPage() -> impl IntoView {
    let brands = brands::brands();

    view! {
        <Header title="Brands" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>"Every franchise brand operated on this platform."</p>

                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                    {brands
                        .into_iter()
                        .map(|brand| {
                            let tone = match brand.status {
                                BrandStatus::Live => BadgeTone::Success,
                                BrandStatus::Onboarding => BadgeTone::Info,
                            };
                            view! {
                                <div class=Theme::CARD>
                                    <div class="space-y-3 p-6">
                                        <div class="flex items-start justify-between gap-2">
                                            <h3 class="text-base font-semibold text-gray-900 dark:text-white">
                                                {brand.name}
                                            </h3>
                                            <Badge tone=tone label=brand.status.label() />
                                        </div>
                                        <p class="font-mono text-xs uppercase text-gray-500 dark:text-gray-400">
                                            {brand.code}
                                        </p>
                                        <p class="text-sm text-gray-600 dark:text-gray-300">
                                            {format!("{} · {} stores", brand.category, brand.store_count)}
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
