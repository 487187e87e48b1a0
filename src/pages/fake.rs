//! In-memory backend for page tests

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{ApiError, ApiResult, ResortApi};
use crate::model::{BookingRequest, DashboardStats, PricingQuery, PricingQuote, Room};

/// Canned reply for one endpoint
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Status(u16),
    Network,
}

impl<T: Clone> Reply<T> {
    fn result(&self) -> ApiResult<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(status) => Err(ApiError::Status {
                status: *status,
                message: String::new(),
            }),
            Reply::Network => Err(ApiError::Network("connection refused".to_string())),
        }
    }
}

/// A recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListRooms,
    CreateBooking(BookingRequest),
    FetchAnalytics(String),
    QuotePrice(PricingQuery),
}

#[derive(Debug)]
pub struct FakeBackend {
    pub rooms: Reply<Vec<Room>>,
    pub booking: Reply<()>,
    pub analytics: Reply<DashboardStats>,
    pub quote: Reply<PricingQuote>,
    pub calls: RefCell<Vec<Call>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            rooms: Reply::Ok(sample_rooms()),
            booking: Reply::Ok(()),
            analytics: Reply::Ok(DashboardStats {
                total_bookings: 42,
                total_revenue: 315000.0,
            }),
            quote: Reply::Ok(PricingQuote {
                room_id: 1,
                check_in: date(2024, 1, 1),
                check_out: date(2024, 1, 4),
                total_price: 6600.0,
                currency: "INR".to_string(),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl ResortApi for FakeBackend {
    async fn list_rooms(&self) -> ApiResult<Vec<Room>> {
        self.record(Call::ListRooms);
        self.rooms.result()
    }

    async fn create_booking(&self, booking: &BookingRequest) -> ApiResult<()> {
        self.record(Call::CreateBooking(booking.clone()));
        self.booking.result()
    }

    async fn fetch_analytics(&self, token: &str) -> ApiResult<DashboardStats> {
        self.record(Call::FetchAnalytics(token.to_string()));
        self.analytics.result()
    }

    async fn quote_price(&self, query: &PricingQuery) -> ApiResult<PricingQuote> {
        self.record(Call::QuotePrice(query.clone()));
        self.quote.result()
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn sample_rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            name: "Deluxe Room".to_string(),
            base_price: 2000.0,
            max_adults: 2,
            max_children: 1,
            description: None,
        },
        Room {
            id: 2,
            name: "Lake View Suite".to_string(),
            base_price: 4500.0,
            max_adults: 4,
            max_children: 2,
            description: Some("Private balcony".to_string()),
        },
    ]
}
