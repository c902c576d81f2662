use crate::app_lib::format;
use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Badge, BadgeTone};
use crate::features::marketing::fixtures;
use crate::features::marketing::types::CouponStatus;
use leptos::prelude::*;

fn status_tone(status: CouponStatus) -> BadgeTone {
    match status {
        CouponStatus::Active => BadgeTone::Success,
        CouponStatus::Exhausted => BadgeTone::Warning,
        CouponStatus::Expired => BadgeTone::Neutral,
    }
}

#[component]
pub fn CouponsPage() -> impl IntoView {
    let coupons = fixtures::coupons();

    view! {
        <Header title="Coupons" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>"Issued coupon pools and their redemption counts."</p>

                <div class=Theme::TABLE_WRAP>
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-800">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"Code"</th>
                                <th scope="col" class=Theme::TH>"Name"</th>
                                <th scope="col" class=Theme::TH>"Discount"</th>
                                <th scope="col" class=Theme::TH>"Redeemed"</th>
                                <th scope="col" class=Theme::TH>"Status"</th>
                                <th scope="col" class=Theme::TH>"Expires"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-800">
                            {coupons
                                .into_iter()
                                .map(|coupon| {
                                    let usage = format!("{} / {}", coupon.redeemed, coupon.issued);
                                    view! {
                                        <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-800/50">
                                            <td class="px-6 py-4 whitespace-nowrap font-mono text-sm text-gray-900 dark:text-white">
                                                {coupon.code}
                                            </td>
                                            <td class=Theme::TD>{coupon.name}</td>
                                            <td class=Theme::TD>{coupon.discount}</td>
                                            <td class=Theme::TD>{usage}</td>
                                            <td class=Theme::TD>
                                                <Badge
                                                    tone=status_tone(coupon.status)
                                                    label=coupon.status.label()
                                                />
                                            </td>
                                            <td class=Theme::TD>{format::short_date(coupon.expires)}</td>
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
