//! Pricing Page
//!
//! Authoritative price for a room and date range.

use leptos::*;

use resort_admin::{format_money, PricingPage, ResortApi};

use crate::api::{self, GlooClient};
use crate::components::InlineLoading;
use crate::state::PageHandle;

type Page = PageHandle<PricingPage<GlooClient>>;

/// Pricing page component
#[component]
pub fn Pricing() -> impl IntoView {
    let page: Page = PageHandle::new(PricingPage::new(api::client()));

    load_rooms(page);
    on_cleanup(move || {
        page.write(|p| p.cancel_pending());
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Pricing"</h1>
                <p class="text-gray-400 mt-1">"Check the price of a stay"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div class="grid md:grid-cols-3 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Room"</label>
                        <select
                            prop:value=move || page.read(|p| p.room_id().to_string())
                            on:change=move |ev| {
                                page.write(|p| p.select_room(event_target_value(&ev)));
                            }
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600"
                        >
                            <option value="">"Select a room"</option>
                            {move || {
                                page.read(|p| p.rooms().value().cloned().unwrap_or_default())
                                    .into_iter()
                                    .map(|room| view! {
                                        <option value=room.id.to_string()>{room.name}</option>
                                    })
                                    .collect_view()
                            }}
                        </select>
                        {move || page.read(|p| p.rooms().error().map(str::to_string)).map(|message| view! {
                            <p class="text-red-400 text-sm mt-1">{message}</p>
                        })}
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Check-in"</label>
                        <input
                            type="date"
                            prop:value=move || page.read(|p| p.check_in().to_string())
                            on:input=move |ev| {
                                page.write(|p| p.set_check_in(event_target_value(&ev)));
                            }
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Check-out"</label>
                        <input
                            type="date"
                            prop:value=move || page.read(|p| p.check_out().to_string())
                            on:input=move |ev| {
                                page.write(|p| p.set_check_out(event_target_value(&ev)));
                            }
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600"
                        />
                    </div>
                </div>

                <button
                    on:click=move |_| check_price(page)
                    disabled=move || page.read(|p| p.is_loading())
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || {
                        if page.read(|p| p.is_loading()) {
                            view! { <InlineLoading /> " Calculating..." }.into_view()
                        } else {
                            "Check Price".into_view()
                        }
                    }}
                </button>

                {move || page.read(|p| p.error().map(str::to_string)).map(|error| view! {
                    <div class="bg-red-900/50 border border-red-700 rounded-lg p-4">{error}</div>
                })}

                {move || page.read(|p| p.quote().cloned()).map(|quote| view! {
                    <div class="bg-gray-700 rounded-lg p-4">
                        <div class="text-sm text-gray-400">
                            {format!("{} to {}", quote.check_in, quote.check_out)}
                        </div>
                        <div class="text-3xl font-bold mt-1">
                            {format_money(quote.total_price, &quote.currency)}
                        </div>
                    </div>
                })}
            </section>
        </div>
    }
}

fn load_rooms(page: Page) {
    let Some((ticket, api)) = page.write(|p| (p.begin_load(), p.api().clone())) else {
        return;
    };

    spawn_local(async move {
        if let Some(result) = ticket.run(api.list_rooms()).await {
            page.write(|p| p.complete_load(&ticket, result));
        }
    });
}

fn check_price(page: Page) {
    let pending = page
        .write(|p| p.begin_check_price().map(|pending| (pending, p.api().clone())))
        .flatten();
    let Some((pending, api)) = pending else {
        return;
    };

    spawn_local(async move {
        if let Some(result) = pending.send(&api).await {
            page.write(|p| p.complete_check_price(&pending, result));
        }
    });
}
