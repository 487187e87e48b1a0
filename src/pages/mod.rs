//! Admin Pages
//!
//! Framework-neutral state for the three admin pages. Each page owns its
//! data-access capability and exposes both a one-shot `async` operation
//! (`load`, `submit`, `check_price`) and the split `begin_*` / `complete_*`
//! steps a UI needs when it must not hold the page across an `.await`.

pub mod booking;
pub mod dashboard;
pub mod pricing;
pub mod request;
pub mod state;

#[cfg(test)]
pub(crate) mod fake;

pub use booking::{BookingPage, PendingSubmit, TotalSource};
pub use dashboard::{DashboardPage, NavLink, PendingAnalytics, NAV_LINKS};
pub use pricing::{PendingQuote, PricingPage};
pub use request::{RequestTracker, Ticket};
pub use state::{messages, LoadState};
