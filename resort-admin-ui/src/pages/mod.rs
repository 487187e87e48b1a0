//! Pages
//!
//! Top-level page components for each route.

pub mod booking;
pub mod dashboard;
pub mod pricing;

pub use booking::Bookings;
pub use dashboard::Dashboard;
pub use pricing::Pricing;
