//! Booking Page
//!
//! Room catalog, booking form with a client-side estimate, and booking
//! submission.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::request::{RequestTracker, Ticket};
use super::state::{messages, LoadState};
use crate::api::{ApiResult, ResortApi};
use crate::form::{estimate_total, reduce, BookingForm, FormField};
use crate::model::{BookingRequest, Room};

/// Where the submitted `total_amount` comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalSource {
    /// The client-side estimate shown on the form
    #[default]
    Estimate,
    /// A fresh quote from the pricing endpoint, fetched just before posting
    Quote,
}

impl FromStr for TotalSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "estimate" => Ok(TotalSource::Estimate),
            "quote" => Ok(TotalSource::Quote),
            other => Err(format!("unknown total source: {} (expected estimate or quote)", other)),
        }
    }
}

impl fmt::Display for TotalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalSource::Estimate => f.write_str("estimate"),
            TotalSource::Quote => f.write_str("quote"),
        }
    }
}

/// Booking page state
pub struct BookingPage<A> {
    api: A,
    total_source: TotalSource,
    rooms: LoadState<Vec<Room>>,
    form: BookingForm,
    message: Option<String>,
    invalid_field: Option<FormField>,
    rooms_request: RequestTracker,
    submit_request: RequestTracker,
}

/// A validated booking on its way to the backend
#[derive(Debug)]
pub struct PendingSubmit {
    ticket: Ticket,
    booking: BookingRequest,
    total_source: TotalSource,
}

impl PendingSubmit {
    /// The payload as built from the form
    pub fn booking(&self) -> &BookingRequest {
        &self.booking
    }

    /// Send the booking. `None` means the page cancelled it.
    pub async fn send<A: ResortApi + ?Sized>(&self, api: &A) -> Option<ApiResult<()>> {
        self.ticket
            .run(post_booking(api, self.booking.clone(), self.total_source))
            .await
    }
}

async fn post_booking<A: ResortApi + ?Sized>(
    api: &A,
    mut booking: BookingRequest,
    total_source: TotalSource,
) -> ApiResult<()> {
    if total_source == TotalSource::Quote {
        let quote = api.quote_price(&booking.pricing_query()).await?;
        tracing::debug!(
            estimate = booking.total_amount,
            quoted = quote.total_price,
            "Using quoted total"
        );
        booking.total_amount = quote.total_price;
    }
    api.create_booking(&booking).await
}

impl<A: ResortApi> BookingPage<A> {
    pub fn new(api: A, total_source: TotalSource) -> Self {
        Self {
            api,
            total_source,
            rooms: LoadState::Idle,
            form: BookingForm::default(),
            message: None,
            invalid_field: None,
            rooms_request: RequestTracker::new(),
            submit_request: RequestTracker::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn rooms(&self) -> &LoadState<Vec<Room>> {
        &self.rooms
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    /// Confirmation or failure message from the last submit
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Field that blocked the last submit, if validation failed
    pub fn invalid_field(&self) -> Option<FormField> {
        self.invalid_field
    }

    /// Whether a booking is in flight; the submit control is disabled meanwhile
    pub fn is_submitting(&self) -> bool {
        self.submit_request.is_busy()
    }

    /// Room currently selected in the form
    pub fn selected_room(&self) -> Option<&Room> {
        let id = self.form.selected_room_id()?;
        self.rooms.value()?.iter().find(|room| room.id == id)
    }

    /// Advisory total for the current form
    pub fn estimated_total(&self) -> f64 {
        let rooms = self.rooms.value().map(Vec::as_slice).unwrap_or_default();
        estimate_total(&self.form, rooms)
    }

    /// Apply one field edit
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        let form = std::mem::take(&mut self.form);
        self.form = reduce(form, field, value);
        if self.invalid_field == Some(field) {
            self.invalid_field = None;
        }
    }

    /// Start loading the room catalog
    pub fn begin_load(&mut self) -> Ticket {
        self.rooms = LoadState::Loading;
        self.rooms_request.begin()
    }

    /// Apply the catalog response, unless a newer load replaced it
    pub fn complete_load(&mut self, ticket: &Ticket, result: ApiResult<Vec<Room>>) {
        if !self.rooms_request.finish(ticket) {
            return;
        }

        self.rooms = match result {
            Ok(rooms) => {
                tracing::info!(count = rooms.len(), "Loaded room catalog");
                LoadState::Ready(rooms)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load rooms");
                LoadState::Failed(messages::ROOMS_FAILED.to_string())
            }
        };
    }

    /// Load the room catalog
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let outcome = ticket.run(self.api.list_rooms()).await;
        if let Some(result) = outcome {
            self.complete_load(&ticket, result);
        }
    }

    /// Validate the form and mark a submission in flight.
    ///
    /// Returns `None` if a submission is already running or the form is
    /// incomplete; in the latter case the page shows a validation message
    /// and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if self.is_submitting() {
            tracing::debug!("Ignoring submit while a booking is in flight");
            return None;
        }

        self.message = None;
        match self.form.to_request(self.estimated_total()) {
            Ok(booking) => {
                self.invalid_field = None;
                Some(PendingSubmit {
                    ticket: self.submit_request.begin(),
                    booking,
                    total_source: self.total_source,
                })
            }
            Err(e) => {
                tracing::debug!(error = %e, "Booking form incomplete");
                self.invalid_field = e.field();
                self.message = Some(messages::BOOKING_INCOMPLETE.to_string());
                None
            }
        }
    }

    /// Apply the booking response, unless the submission was cancelled
    pub fn complete_submit(&mut self, pending: &PendingSubmit, result: ApiResult<()>) {
        if !self.submit_request.finish(&pending.ticket) {
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!(
                    room_id = pending.booking.room_id,
                    check_in = %pending.booking.check_in,
                    check_out = %pending.booking.check_out,
                    "Booking submitted"
                );
                self.message = Some(messages::BOOKING_CONFIRMED.to_string());
                self.form = BookingForm::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Booking failed");
                self.message = Some(messages::BOOKING_FAILED.to_string());
            }
        }
    }

    /// Validate and submit the form
    pub async fn submit(&mut self) {
        let Some(pending) = self.begin_submit() else {
            return;
        };
        let outcome = pending.send(&self.api).await;
        if let Some(result) = outcome {
            self.complete_submit(&pending, result);
        }
    }

    /// Cancel everything in flight
    pub fn cancel_pending(&mut self) {
        self.rooms_request.cancel();
        self.submit_request.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fake::{date, Call, FakeBackend, Reply};

    async fn loaded_page(backend: FakeBackend, total_source: TotalSource) -> BookingPage<FakeBackend> {
        let mut page = BookingPage::new(backend, total_source);
        page.load().await;
        page
    }

    fn fill(page: &mut BookingPage<FakeBackend>) {
        for (field, value) in [
            (FormField::RoomId, "1"),
            (FormField::GuestName, "Asha Rao"),
            (FormField::GuestEmail, "asha@example.com"),
            (FormField::GuestPhone, "9845000000"),
            (FormField::CheckIn, "2024-01-01"),
            (FormField::CheckOut, "2024-01-04"),
            (FormField::Children, "1"),
            (FormField::SpecialRequests, "Airport pickup"),
        ] {
            page.update(field, value);
        }
    }

    fn bookings(page: &BookingPage<FakeBackend>) -> Vec<BookingRequest> {
        page.api()
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateBooking(booking) => Some(booking),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_rooms() {
        let page = loaded_page(FakeBackend::default(), TotalSource::Estimate).await;

        assert_eq!(page.rooms().value().map(Vec::len), Some(2));
        assert_eq!(page.api().calls(), vec![Call::ListRooms]);
        assert!(page.message().is_none());
    }

    #[test]
    fn test_rooms_unsettled_until_load_completes() {
        let mut page = BookingPage::new(FakeBackend::default(), TotalSource::Estimate);
        assert!(!page.rooms().is_settled());

        let ticket = page.begin_load();
        assert!(!page.rooms().is_settled());

        page.complete_load(&ticket, Ok(crate::pages::fake::sample_rooms()));
        assert!(page.rooms().is_settled());
    }

    #[tokio::test]
    async fn test_load_rooms_failure() {
        let backend = FakeBackend {
            rooms: Reply::Network,
            ..Default::default()
        };
        let page = loaded_page(backend, TotalSource::Estimate).await;

        assert_eq!(page.rooms().error(), Some(messages::ROOMS_FAILED));
        assert_eq!(page.estimated_total(), 0.0);
    }

    #[tokio::test]
    async fn test_estimate_follows_form() {
        let mut page = loaded_page(FakeBackend::default(), TotalSource::Estimate).await;
        assert_eq!(page.estimated_total(), 0.0);

        fill(&mut page);
        assert_eq!(page.estimated_total(), 6000.0);
        assert_eq!(page.selected_room().map(|r| r.name.as_str()), Some("Deluxe Room"));

        page.update(FormField::RoomId, "2");
        assert_eq!(page.estimated_total(), 13500.0);

        page.update(FormField::CheckOut, "2023-12-30");
        assert_eq!(page.estimated_total(), 0.0);
    }

    #[tokio::test]
    async fn test_submit_posts_once_and_resets_form() {
        let mut page = loaded_page(FakeBackend::default(), TotalSource::Estimate).await;
        fill(&mut page);
        page.submit().await;

        let posted = bookings(&page);
        assert_eq!(posted.len(), 1);
        let booking = &posted[0];
        assert_eq!(booking.room_id, 1);
        assert_eq!(booking.adults, 2);
        assert_eq!(booking.children, 1);
        assert_eq!(booking.total_amount, 6000.0);
        assert_eq!(booking.check_in, date(2024, 1, 1));
        assert_eq!(booking.special_requests, "Airport pickup");

        assert_eq!(page.message(), Some(messages::BOOKING_CONFIRMED));
        assert_eq!(page.form(), &BookingForm::default());
        assert_eq!(page.estimated_total(), 0.0);
        assert!(!page.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_form() {
        for reply in [Reply::Status(500), Reply::Status(422), Reply::Network] {
            let backend = FakeBackend {
                booking: reply,
                ..Default::default()
            };
            let mut page = loaded_page(backend, TotalSource::Estimate).await;
            fill(&mut page);
            let before = page.form().clone();

            page.submit().await;

            assert_eq!(page.message(), Some(messages::BOOKING_FAILED));
            assert_eq!(page.form(), &before);
            assert!(!page.is_submitting());
        }
    }

    #[tokio::test]
    async fn test_incomplete_form_never_reaches_backend() {
        let mut page = loaded_page(FakeBackend::default(), TotalSource::Estimate).await;
        fill(&mut page);
        page.update(FormField::GuestPhone, "");

        page.submit().await;

        assert!(bookings(&page).is_empty());
        assert_eq!(page.message(), Some(messages::BOOKING_INCOMPLETE));
        assert_eq!(page.invalid_field(), Some(FormField::GuestPhone));

        page.update(FormField::GuestPhone, "9845000000");
        assert_eq!(page.invalid_field(), None);
    }

    #[tokio::test]
    async fn test_second_submit_refused_while_in_flight() {
        let mut page = loaded_page(FakeBackend::default(), TotalSource::Estimate).await;
        fill(&mut page);

        let pending = page.begin_submit().unwrap();
        assert!(page.is_submitting());
        assert!(page.begin_submit().is_none());

        let result = pending.send(page.api()).await.unwrap();
        page.complete_submit(&pending, result);

        assert_eq!(bookings(&page).len(), 1);
        assert_eq!(page.message(), Some(messages::BOOKING_CONFIRMED));
    }

    #[tokio::test]
    async fn test_quoted_total_replaces_estimate() {
        let mut page = loaded_page(FakeBackend::default(), TotalSource::Quote).await;
        fill(&mut page);
        page.submit().await;

        let calls = page.api().calls();
        assert!(matches!(calls[1], Call::QuotePrice(_)));
        let posted = bookings(&page);
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].total_amount, 6600.0);
    }

    #[tokio::test]
    async fn test_quote_failure_blocks_booking() {
        let backend = FakeBackend {
            quote: Reply::Status(400),
            ..Default::default()
        };
        let mut page = loaded_page(backend, TotalSource::Quote).await;
        fill(&mut page);
        page.submit().await;

        assert!(bookings(&page).is_empty());
        assert_eq!(page.message(), Some(messages::BOOKING_FAILED));
    }

    #[tokio::test]
    async fn test_stale_room_load_discarded() {
        let mut page = BookingPage::new(FakeBackend::default(), TotalSource::Estimate);

        let first = page.begin_load();
        let second = page.begin_load();

        page.complete_load(&first, Ok(Vec::new()));
        assert!(page.rooms().is_loading());

        let rooms = page.api().list_rooms().await;
        page.complete_load(&second, rooms);
        assert_eq!(page.rooms().value().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_cancelled_submit_leaves_state_alone() {
        let mut page = loaded_page(FakeBackend::default(), TotalSource::Estimate).await;
        fill(&mut page);

        let pending = page.begin_submit().unwrap();
        page.cancel_pending();

        assert!(pending.send(page.api()).await.is_none());
        page.complete_submit(&pending, Ok(()));
        assert!(page.message().is_none());
        assert_ne!(page.form(), &BookingForm::default());
    }

    #[test]
    fn test_total_source_parsing() {
        assert_eq!("estimate".parse::<TotalSource>(), Ok(TotalSource::Estimate));
        assert_eq!(" Quote ".parse::<TotalSource>(), Ok(TotalSource::Quote));
        assert!("server".parse::<TotalSource>().is_err());
        assert_eq!(TotalSource::Quote.to_string(), "quote");
    }
}
