use crate::app_lib::theme::Theme;
use crate::components::layout::{Header, MainContent};
use crate::components::{Badge, BadgeTone};
use crate::features::admins::{self, Role};
use leptos::prelude::*;

fn role_tone(role: Role) -> BadgeTone {
    match role {
        Role::Admin => BadgeTone::Info,
        Role::Manager => BadgeTone::Neutral,
        Role::Viewer => BadgeTone::Warning,
    }
}

#[component]
pub fn AdminsPage() -> impl IntoView {
    let admins = admins::admins();

    view! {
        <Header title="Admin Accounts" />
        <MainContent>
            <div class="space-y-6">
                <p class=Theme::PAGE_DESC>"Console accounts with access to this dashboard."</p>

                <div class=Theme::TABLE_WRAP>
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-800">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"Name"</th>
                                <th scope="col" class=Theme::TH>"Email"</th>
                                <th scope="col" class=Theme::TH>"Role"</th>
                                <th scope="col" class=Theme::TH>"Last sign-in"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-800">
                            {admins
                                .into_iter()
                                .map(|account| {
                                    view! {
                                        <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-800/50">
                                            <td class=Theme::TD_PRIMARY>{account.name}</td>
                                            <td class=Theme::TD>{account.email}</td>
                                            <td class=Theme::TD>
                                                <Badge
                                                    tone=role_tone(account.role)
                                                    label=account.role.label()
                                                />
                                            </td>
                                            <td class=Theme::TD>{account.last_login}</td>
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
