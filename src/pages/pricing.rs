//! Pricing Page
//!
//! Authoritative price lookup for a room and date range.

use super::request::{RequestTracker, Ticket};
use super::state::{messages, LoadState};
use crate::api::{ApiResult, ResortApi};
use crate::model::{parse_date, PricingQuery, PricingQuote, Room};

/// Pricing page state
pub struct PricingPage<A> {
    api: A,
    rooms: LoadState<Vec<Room>>,
    room_id: String,
    check_in: String,
    check_out: String,
    quote: Option<PricingQuote>,
    error: Option<String>,
    rooms_request: RequestTracker,
    quote_request: RequestTracker,
}

/// A price lookup waiting to be sent
#[derive(Debug)]
pub struct PendingQuote {
    ticket: Ticket,
    query: PricingQuery,
}

impl PendingQuote {
    pub fn query(&self) -> &PricingQuery {
        &self.query
    }

    /// Ask the backend for the price. `None` means the lookup was superseded.
    pub async fn send<A: ResortApi + ?Sized>(&self, api: &A) -> Option<ApiResult<PricingQuote>> {
        self.ticket.run(api.quote_price(&self.query)).await
    }
}

impl<A: ResortApi> PricingPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            rooms: LoadState::Idle,
            room_id: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            quote: None,
            error: None,
            rooms_request: RequestTracker::new(),
            quote_request: RequestTracker::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn rooms(&self) -> &LoadState<Vec<Room>> {
        &self.rooms
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn check_in(&self) -> &str {
        &self.check_in
    }

    pub fn check_out(&self) -> &str {
        &self.check_out
    }

    /// Last successful quote
    pub fn quote(&self) -> Option<&PricingQuote> {
        self.quote.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a lookup is in flight
    pub fn is_loading(&self) -> bool {
        self.quote_request.is_busy()
    }

    pub fn select_room(&mut self, room_id: impl Into<String>) {
        self.room_id = room_id.into();
    }

    pub fn set_check_in(&mut self, date: impl Into<String>) {
        self.check_in = date.into();
    }

    pub fn set_check_out(&mut self, date: impl Into<String>) {
        self.check_out = date.into();
    }

    /// Start loading the room list
    pub fn begin_load(&mut self) -> Ticket {
        self.rooms = LoadState::Loading;
        self.rooms_request.begin()
    }

    /// Apply the room list response, unless a newer load replaced it
    pub fn complete_load(&mut self, ticket: &Ticket, result: ApiResult<Vec<Room>>) {
        if !self.rooms_request.finish(ticket) {
            return;
        }

        self.rooms = match result {
            Ok(rooms) => {
                tracing::info!(count = rooms.len(), "Loaded rooms for pricing");
                LoadState::Ready(rooms)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load rooms");
                LoadState::Failed(messages::ROOMS_FAILED.to_string())
            }
        };
    }

    /// Load the room list
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let outcome = ticket.run(self.api.list_rooms()).await;
        if let Some(result) = outcome {
            self.complete_load(&ticket, result);
        }
    }

    fn query(&self) -> Option<PricingQuery> {
        Some(PricingQuery {
            room_id: self.room_id.trim().parse().ok()?,
            check_in: parse_date(&self.check_in)?,
            check_out: parse_date(&self.check_out)?,
        })
    }

    /// Validate the selection and start a lookup, superseding any lookup
    /// still in flight.
    ///
    /// With a missing room or date the page shows a validation message and
    /// nothing is sent.
    pub fn begin_check_price(&mut self) -> Option<PendingQuote> {
        let Some(query) = self.query() else {
            tracing::debug!("Price check without room and dates");
            self.error = Some(messages::PRICING_INCOMPLETE.to_string());
            return None;
        };

        self.error = None;
        self.quote = None;
        Some(PendingQuote {
            ticket: self.quote_request.begin(),
            query,
        })
    }

    /// Apply the lookup response, unless a newer lookup replaced it
    pub fn complete_check_price(&mut self, pending: &PendingQuote, result: ApiResult<PricingQuote>) {
        if !self.quote_request.finish(&pending.ticket) {
            return;
        }

        match result {
            Ok(quote) => {
                tracing::info!(
                    room_id = quote.room_id,
                    total_price = quote.total_price,
                    currency = %quote.currency,
                    "Received price quote"
                );
                self.quote = Some(quote);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, room_id = pending.query.room_id, "Price check failed");
                self.error = Some(messages::PRICING_FAILED.to_string());
            }
        }
    }

    /// Look up the price for the current selection
    pub async fn check_price(&mut self) {
        let Some(pending) = self.begin_check_price() else {
            return;
        };
        let outcome = pending.send(&self.api).await;
        if let Some(result) = outcome {
            self.complete_check_price(&pending, result);
        }
    }

    /// Cancel everything in flight
    pub fn cancel_pending(&mut self) {
        self.rooms_request.cancel();
        self.quote_request.cancel();
    }
}
