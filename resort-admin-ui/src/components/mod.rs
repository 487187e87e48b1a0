//! UI Components
//!
//! Reusable Leptos components for the admin pages.

pub mod loading;
pub mod metric_card;
pub mod nav;

pub use loading::{InlineLoading, Loading};
pub use metric_card::MetricCard;
pub use nav::Nav;
