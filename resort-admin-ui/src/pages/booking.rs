//! Booking Page
//!
//! Room selection, guest details and a live estimate of the stay.

use leptos::*;

use resort_admin::model::DEFAULT_CURRENCY;
use resort_admin::pages::messages;
use resort_admin::{format_money, BookingPage, FormField, ResortApi, TotalSource};

use crate::api::{self, GlooClient};
use crate::components::{InlineLoading, Loading};
use crate::state::PageHandle;

type Page = PageHandle<BookingPage<GlooClient>>;

/// Booking page component
#[component]
pub fn Bookings() -> impl IntoView {
    let page: Page = PageHandle::new(BookingPage::new(api::client(), TotalSource::Estimate));

    load_rooms(page);
    on_cleanup(move || {
        page.write(|p| p.cancel_pending());
    });

    // Memoized: the form must not re-mount on each keystroke
    let settled = create_memo(move |_| page.read(|p| p.rooms().is_settled()));
    let rooms_error = create_memo(move |_| page.read(|p| p.rooms().error().map(str::to_string)));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Book a Room"</h1>
                <p class="text-gray-400 mt-1">"Create a booking on behalf of a guest"</p>
            </div>

            {move || {
                if !settled.get() {
                    return view! { <Loading /> }.into_view();
                }
                view! {
                    {move || rooms_error.get().map(|message| view! {
                        <div class="bg-red-900/50 border border-red-700 rounded-lg p-4">{message}</div>
                    })}
                    <BookingForm page=page />
                }
                .into_view()
            }}
        </div>
    }
}

/// Guest details, estimate and submit button
#[component]
fn BookingForm(page: Page) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit(page);
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">{FormField::RoomId.label()}</label>
                <select
                    name=FormField::RoomId.name()
                    prop:value=move || page.read(|p| p.form().room_id.clone())
                    on:change=move |ev| {
                        page.write(|p| p.update(FormField::RoomId, event_target_value(&ev)));
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600"
                >
                    <option value="">"Select a room"</option>
                    {move || {
                        page.read(|p| p.rooms().value().cloned().unwrap_or_default())
                            .into_iter()
                            .map(|room| {
                                let label = format!(
                                    "{} ({} / night)",
                                    room.name,
                                    format_money(room.base_price, DEFAULT_CURRENCY)
                                );
                                view! { <option value=room.id.to_string()>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="grid md:grid-cols-3 gap-4">
                <FieldInput page=page field=FormField::GuestName input_type="text" />
                <FieldInput page=page field=FormField::GuestEmail input_type="email" />
                <FieldInput page=page field=FormField::GuestPhone input_type="tel" />
            </div>

            <div class="grid md:grid-cols-4 gap-4">
                <FieldInput page=page field=FormField::CheckIn input_type="date" />
                <FieldInput page=page field=FormField::CheckOut input_type="date" />
                <FieldInput page=page field=FormField::Adults input_type="number" />
                <FieldInput page=page field=FormField::Children input_type="number" />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    {FormField::SpecialRequests.label()}
                </label>
                <textarea
                    name=FormField::SpecialRequests.name()
                    prop:value=move || page.read(|p| p.form().special_requests.clone())
                    on:input=move |ev| {
                        page.write(|p| p.update(FormField::SpecialRequests, event_target_value(&ev)));
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600"
                />
            </div>

            <div class="flex items-center justify-between">
                <div class="text-lg">
                    "Estimated Total: "
                    <span class="font-bold">
                        {move || format_money(page.read(|p| p.estimated_total()), DEFAULT_CURRENCY)}
                    </span>
                </div>

                <button
                    type="submit"
                    disabled=move || page.read(|p| p.is_submitting())
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || {
                        if page.read(|p| p.is_submitting()) {
                            view! { <InlineLoading /> " Booking..." }.into_view()
                        } else {
                            "Book Now".into_view()
                        }
                    }}
                </button>
            </div>

            {move || page.read(|p| p.message().map(str::to_string)).map(|message| {
                let class = if message == messages::BOOKING_CONFIRMED {
                    "bg-green-900/50 border border-green-700 rounded-lg p-4"
                } else {
                    "bg-red-900/50 border border-red-700 rounded-lg p-4"
                };
                view! { <div class=class>{message}</div> }
            })}
        </form>
    }
}

/// Labelled input bound to one form field
#[component]
fn FieldInput(page: Page, field: FormField, input_type: &'static str) -> impl IntoView {
    let invalid = move || page.read(|p| p.invalid_field() == Some(field));

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{field.label()}</label>
            <input
                type=input_type
                name=field.name()
                prop:value=move || page.read(|p| p.form().get(field).to_string())
                on:input=move |ev| {
                    page.write(|p| p.update(field, event_target_value(&ev)));
                }
                class="w-full bg-gray-700 rounded-lg px-4 py-3 border focus:outline-none"
                class:border-red-500=invalid
                class:border-gray-600=move || !invalid()
            />
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

fn submit(page: Page) {
    let pending = page
        .write(|p| p.begin_submit().map(|pending| (pending, p.api().clone())))
        .flatten();
    let Some((pending, api)) = pending else {
        return;
    };

    spawn_local(async move {
        if let Some(result) = pending.send(&api).await {
            page.write(|p| p.complete_submit(&pending, result));
        }
    });
}
