//! Resort Backend API
//!
//! The pages only ever talk to the backend through [`ResortApi`], so the
//! terminal front end (reqwest), the web front end (gloo-net) and the tests
//! (an in-memory fake) can each supply their own transport.
//!
//! # Endpoints
//!
//! - `GET /rooms` - Room catalog
//! - `POST /bookings` - Create a booking
//! - `GET /admin/analytics` - Booking and revenue totals (bearer token)
//! - `GET /pricing/room/:id/price` - Authoritative price for a stay
//! - `POST /auth/login` - Obtain an admin token (terminal front end only)

pub mod error;

#[cfg(feature = "native")]
pub mod client;

pub use error::{ApiError, ApiResult};

#[cfg(feature = "native")]
pub use client::{ClientConfig, ResortClient};

use async_trait::async_trait;

use crate::model::{BookingRequest, DashboardStats, PricingQuery, PricingQuote, Room};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Backend operations used by the admin pages.
///
/// Futures are not required to be `Send`: pages run on a single-threaded
/// event loop (the browser, or the CLI's main task).
#[async_trait(?Send)]
pub trait ResortApi {
    /// Fetch the room catalog
    async fn list_rooms(&self) -> ApiResult<Vec<Room>>;

    /// Submit a booking. Any 2xx counts as success; the body is ignored.
    async fn create_booking(&self, booking: &BookingRequest) -> ApiResult<()>;

    /// Fetch the analytics summary with a bearer token
    async fn fetch_analytics(&self, token: &str) -> ApiResult<DashboardStats>;

    /// Ask the backend to price a stay
    async fn quote_price(&self, query: &PricingQuery) -> ApiResult<PricingQuote>;
}

/// Normalize a base URL: remove trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
