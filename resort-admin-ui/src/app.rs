//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Bookings, Dashboard, Pricing};
use crate::state::provide_token_source;

pub const BOOKINGS_PATH: &str = "/admin/bookings";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";
pub const PRICING_PATH: &str = "/admin/pricing";

/// Header links, in display order
pub const NAV_ROUTES: [(&str, &str); 3] = [
    (BOOKINGS_PATH, "Bookings"),
    (DASHBOARD_PATH, "Dashboard"),
    (PRICING_PATH, "Pricing"),
];

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_token_source();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path=BOOKINGS_PATH /> } />
                        <Route path=BOOKINGS_PATH view=Bookings />
                        <Route path=DASHBOARD_PATH view=Dashboard />
                        <Route path=PRICING_PATH view=Pricing />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=BOOKINGS_PATH
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Bookings"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resort_admin::pages::NAV_LINKS;

    #[test]
    fn test_nav_routes_distinct() {
        for (i, (path, _)) in NAV_ROUTES.iter().enumerate() {
            assert!(path.starts_with("/admin/"));
            assert!(NAV_ROUTES[i + 1..].iter().all(|(other, _)| other != path));
        }
    }

    #[test]
    fn test_quick_actions_resolve_to_routes() {
        for href in [BOOKINGS_PATH, PRICING_PATH] {
            assert!(NAV_LINKS.iter().any(|link| link.href == href));
        }
    }
}
