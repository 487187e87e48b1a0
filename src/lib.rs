//! # Resort Admin
//!
//! Admin pages for the resort booking platform: a booking form with a
//! client-side price estimate, an analytics dashboard behind the admin token,
//! and an authoritative price lookup.
//!
//! ## Modules
//!
//! - [`model`]: Backend payloads
//! - [`form`]: Booking form state, reducer and estimate
//! - [`api`]: Backend access trait and the reqwest client
//! - [`auth`]: Admin token sources
//! - [`pages`]: Page state machines shared by the terminal and web front ends
//!
//! The `native` feature (on by default) adds the HTTP client, file token
//! store, configuration and terminal rendering. The web front end builds
//! with `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resort_admin::form::FormField;
//! use resort_admin::pages::{BookingPage, TotalSource};
//! use resort_admin::{ClientConfig, ResortClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ResortClient::new(ClientConfig::default())?;
//!     let mut page = BookingPage::new(client, TotalSource::Estimate);
//!
//!     // Load the room catalog and fill in the form
//!     page.load().await;
//!     page.update(FormField::RoomId, "1");
//!     page.update(FormField::CheckIn, "2024-01-01");
//!     page.update(FormField::CheckOut, "2024-01-04");
//!     println!("Estimated total: {}", page.estimated_total());
//!
//!     page.update(FormField::GuestName, "Asha Rao");
//!     page.update(FormField::GuestEmail, "asha@example.com");
//!     page.update(FormField::GuestPhone, "9845000000");
//!     page.submit().await;
//!
//!     println!("{}", page.message().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod form;
pub mod model;
pub mod pages;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod render;

pub use api::{ApiError, ApiResult, ResortApi, DEFAULT_API_BASE};

#[cfg(feature = "native")]
pub use api::{ClientConfig, ResortClient};

pub use auth::{StaticToken, TokenSource, TokenStoreError, TOKEN_KEY};

#[cfg(feature = "native")]
pub use auth::FileTokenStore;

pub use form::{estimate_total, reduce, BookingForm, FormField, ValidationError};

pub use model::{
    format_money, BookingRequest, DashboardStats, LoginResponse, PricingQuery, PricingQuote, Room,
};

pub use pages::{
    BookingPage, DashboardPage, LoadState, PricingPage, RequestTracker, Ticket, TotalSource,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
