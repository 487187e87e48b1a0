//! Dashboard Page
//!
//! Booking and revenue totals for signed-in admins, plus links to the other
//! admin sections.

use super::request::{RequestTracker, Ticket};
use super::state::{messages, LoadState};
use crate::api::{ApiResult, ResortApi};
use crate::auth::TokenSource;
use crate::model::DashboardStats;

/// Link to another admin section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Quick actions shown under the stats
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Manage Bookings",
        href: "/admin/bookings",
    },
    NavLink {
        label: "Manage Rooms",
        href: "/admin/rooms",
    },
    NavLink {
        label: "Pricing Rules",
        href: "/admin/pricing",
    },
    NavLink {
        label: "Reviews",
        href: "/admin/reviews",
    },
];

/// Dashboard page state
pub struct DashboardPage<A, T> {
    api: A,
    tokens: T,
    stats: LoadState<DashboardStats>,
    request: RequestTracker,
}

/// An analytics request waiting to be sent
pub struct PendingAnalytics {
    ticket: Ticket,
    token: String,
}

impl PendingAnalytics {
    /// Fetch the stats. `None` means the page cancelled the request.
    pub async fn send<A: ResortApi + ?Sized>(&self, api: &A) -> Option<ApiResult<DashboardStats>> {
        self.ticket.run(api.fetch_analytics(&self.token)).await
    }
}

impl<A: ResortApi, T: TokenSource> DashboardPage<A, T> {
    pub fn new(api: A, tokens: T) -> Self {
        Self {
            api,
            tokens,
            stats: LoadState::Idle,
            request: RequestTracker::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &LoadState<DashboardStats> {
        &self.stats
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.value()
    }

    pub fn nav_links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }

    /// Read the token and start the analytics request.
    ///
    /// Without a token the page fails immediately and nothing is sent.
    pub fn begin_load(&mut self) -> Option<PendingAnalytics> {
        let Some(token) = self.tokens.admin_token() else {
            tracing::warn!("No admin token stored; dashboard unavailable");
            self.request.cancel();
            self.stats = LoadState::Failed(messages::UNAUTHORIZED.to_string());
            return None;
        };

        self.stats = LoadState::Loading;
        Some(PendingAnalytics {
            ticket: self.request.begin(),
            token,
        })
    }

    /// Apply the analytics response, unless a newer load replaced it
    pub fn complete_load(&mut self, pending: &PendingAnalytics, result: ApiResult<DashboardStats>) {
        if !self.request.finish(&pending.ticket) {
            return;
        }

        self.stats = match result {
            Ok(stats) => {
                tracing::info!(
                    total_bookings = stats.total_bookings,
                    total_revenue = stats.total_revenue,
                    "Loaded dashboard stats"
                );
                LoadState::Ready(stats)
            }
            Err(e) if e.is_unauthorized() => {
                tracing::warn!(error = %e, "Admin token rejected");
                LoadState::Failed(messages::DASHBOARD_FAILED.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch dashboard data");
                LoadState::Failed(messages::DASHBOARD_FAILED.to_string())
            }
        };
    }

    /// Load the dashboard
    pub async fn load(&mut self) {
        let Some(pending) = self.begin_load() else {
            return;
        };
        let outcome = pending.send(&self.api).await;
        if let Some(result) = outcome {
            self.complete_load(&pending, result);
        }
    }

    /// Cancel the request in flight
    pub fn cancel_pending(&mut self) {
        self.request.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;
    use crate::pages::fake::{Call, FakeBackend, Reply};

    #[tokio::test]
    async fn test_missing_token_makes_no_calls() {
        let mut page = DashboardPage::new(FakeBackend::default(), StaticToken::none());
        page.load().await;

        assert_eq!(page.state().error(), Some(messages::UNAUTHORIZED));
        assert!(page.stats().is_none());
        assert!(page.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_loads_stats_with_bearer_token() {
        let mut page = DashboardPage::new(FakeBackend::default(), StaticToken::new("jwt-token"));
        page.load().await;

        let stats = page.stats().unwrap();
        assert_eq!(stats.total_bookings, 42);
        assert_eq!(stats.total_revenue, 315000.0);
        assert_eq!(
            page.api().calls(),
            vec![Call::FetchAnalytics("jwt-token".to_string())]
        );
    }

    #[tokio::test]
    async fn test_rejected_token_shows_generic_error() {
        for reply in [Reply::Status(401), Reply::Status(403), Reply::Status(500), Reply::Network] {
            let backend = FakeBackend {
                analytics: reply,
                ..Default::default()
            };
            let mut page = DashboardPage::new(backend, StaticToken::new("expired"));
            page.load().await;

            assert_eq!(page.state().error(), Some(messages::DASHBOARD_FAILED));
            assert!(page.stats().is_none());
        }
    }

    #[tokio::test]
    async fn test_reload_supersedes_previous_request() {
        let mut page = DashboardPage::new(FakeBackend::default(), StaticToken::new("jwt-token"));

        let first = page.begin_load().unwrap();
        let second = page.begin_load().unwrap();
        assert!(first.send(page.api()).await.is_none());

        let result = second.send(page.api()).await.unwrap();
        page.complete_load(&second, result);
        assert!(page.stats().is_some());
    }

    #[test]
    fn test_nav_links() {
        let page = DashboardPage::new(FakeBackend::default(), StaticToken::none());
        let hrefs: Vec<_> = page.nav_links().iter().map(|link| link.href).collect();
        assert_eq!(
            hrefs,
            vec!["/admin/bookings", "/admin/rooms", "/admin/pricing", "/admin/reviews"]
        );
    }
}
