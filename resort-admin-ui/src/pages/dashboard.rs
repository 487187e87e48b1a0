//! Dashboard Page
//!
//! Booking and revenue totals for the signed-in admin.

use leptos::*;
use leptos_router::*;

use resort_admin::model::DEFAULT_CURRENCY;
use resort_admin::{format_money, DashboardPage, LoadState};

use crate::api::{self, GlooClient};
use crate::components::{Loading, MetricCard};
use crate::state::{LocalStorageToken, PageHandle};

type Page = PageHandle<DashboardPage<GlooClient, LocalStorageToken>>;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let tokens = use_context::<LocalStorageToken>().unwrap_or_default();
    let page: Page = PageHandle::new(DashboardPage::new(api::client(), tokens));

    load(page);
    on_cleanup(move || {
        page.write(|p| p.cancel_pending());
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Admin Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Bookings and revenue at a glance"</p>
            </div>

            {move || match page.read(|p| p.state().clone()) {
                LoadState::Idle | LoadState::Loading => view! { <Loading /> }.into_view(),
                LoadState::Failed(message) => view! {
                    <div class="bg-red-900/50 border border-red-700 rounded-lg p-4">{message}</div>
                }.into_view(),
                LoadState::Ready(stats) => view! {
                    <div class="grid md:grid-cols-2 gap-4">
                        <MetricCard
                            label="Total Bookings"
                            value=stats.total_bookings.to_string()
                            icon="📅"
                        />
                        <MetricCard
                            label="Total Revenue"
                            value=format_money(stats.total_revenue, DEFAULT_CURRENCY)
                            icon="💰"
                        />
                    </div>

                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Quick Actions"</h2>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            {page.read(|p| p.nav_links()).iter().map(|link| view! {
                                <A
                                    href=link.href
                                    class="px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg text-center transition-colors"
                                >
                                    {link.label}
                                </A>
                            }).collect_view()}
                        </div>
                    </section>
                }.into_view(),
            }}
        </div>
    }
}

fn load(page: Page) {
    let pending = page
        .write(|p| p.begin_load().map(|pending| (pending, p.api().clone())))
        .flatten();
    let Some((pending, api)) = pending else {
        return;
    };

    spawn_local(async move {
        if let Some(result) = pending.send(&api).await {
            page.write(|p| p.complete_load(&pending, result));
        }
    });
}
