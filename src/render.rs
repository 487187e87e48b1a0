//! Terminal Rendering
//!
//! Plain-text views of the admin pages for the command-line front end.

use std::fmt::{self, Write};

use crate::api::ResortApi;
use crate::auth::TokenSource;
use crate::model::{format_money, Room, DEFAULT_CURRENCY};
use crate::pages::{BookingPage, DashboardPage, LoadState, PricingPage};

const LOADING: &str = "Loading...";

/// Room catalog as a table
pub fn rooms_table(rooms: &[Room]) -> Result<String, fmt::Error> {
    if rooms.is_empty() {
        return Ok("No rooms available.\n".to_string());
    }

    let mut out = String::new();
    writeln!(
        out,
        "{:<6} {:<24} {:>12} {:>7} {:>9}",
        "ID", "Name", "Per night", "Adults", "Children"
    )?;
    writeln!(out, "{}", "-".repeat(62))?;

    for room in rooms {
        writeln!(
            out,
            "{:<6} {:<24} {:>12} {:>7} {:>9}",
            room.id,
            room.name,
            format_money(room.base_price, DEFAULT_CURRENCY),
            room.max_adults,
            room.max_children
        )?;
    }
    Ok(out)
}

fn rooms_section(state: &LoadState<Vec<Room>>) -> Result<String, fmt::Error> {
    match state {
        LoadState::Idle => Ok(String::new()),
        LoadState::Loading => Ok(format!("{}\n", LOADING)),
        LoadState::Ready(rooms) => rooms_table(rooms),
        LoadState::Failed(message) => Ok(format!("{}\n", message)),
    }
}

/// Booking page: selected room, estimate and the last message
pub fn booking_view<A: ResortApi>(page: &BookingPage<A>) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if let Some(room) = page.selected_room() {
        writeln!(
            out,
            "Room: {} ({} per night)",
            room.name,
            format_money(room.base_price, DEFAULT_CURRENCY)
        )?;
    } else if let Some(message) = page.rooms().error() {
        writeln!(out, "{}", message)?;
    }

    let form = page.form();
    if !form.check_in.is_empty() || !form.check_out.is_empty() {
        writeln!(out, "Stay: {} to {}", form.check_in, form.check_out)?;
    }
    writeln!(
        out,
        "Estimated total: {}",
        format_money(page.estimated_total(), DEFAULT_CURRENCY)
    )?;

    if page.is_submitting() {
        writeln!(out, "Submitting...")?;
    }
    if let Some(message) = page.message() {
        writeln!(out, "{}", message)?;
    }
    Ok(out)
}

/// Dashboard page: stats cards and quick links
pub fn dashboard_view<A: ResortApi, T: TokenSource>(
    page: &DashboardPage<A, T>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    match page.state() {
        LoadState::Idle => {}
        LoadState::Loading => {
            writeln!(out, "{}", LOADING)?;
        }
        LoadState::Failed(message) => {
            writeln!(out, "{}", message)?;
        }
        LoadState::Ready(stats) => {
            writeln!(out, "{:<16} {}", "Total Bookings", stats.total_bookings)?;
            writeln!(
                out,
                "{:<16} {}",
                "Total Revenue",
                format_money(stats.total_revenue, DEFAULT_CURRENCY)
            )?;
            writeln!(out)?;
            writeln!(out, "Quick actions:")?;
            for link in page.nav_links() {
                writeln!(out, "  {:<18} {}", link.label, link.href)?;
            }
        }
    }
    Ok(out)
}

/// Pricing page: current selection and result
pub fn pricing_view<A: ResortApi>(page: &PricingPage<A>) -> Result<String, fmt::Error> {
    let mut out = rooms_section(page.rooms())?;

    if page.is_loading() {
        writeln!(out, "Calculating...")?;
    }
    if let Some(error) = page.error() {
        writeln!(out, "{}", error)?;
    }
    if let Some(quote) = page.quote() {
        writeln!(
            out,
            "Room {} from {} to {}: {}",
            quote.room_id,
            quote.check_in,
            quote.check_out,
            format_money(quote.total_price, &quote.currency)
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;
    use crate::form::FormField;
    use crate::pages::fake::FakeBackend;
    use crate::pages::{messages, TotalSource};

    #[test]
    fn test_rooms_table() {
        let rooms = crate::pages::fake::sample_rooms();
        let table = rooms_table(&rooms).unwrap();
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("Deluxe Room"));
        assert!(lines[2].contains("₹2000"));
        assert!(lines[3].contains("Lake View Suite"));
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(rooms_table(&[]).unwrap(), "No rooms available.\n");
    }

    #[tokio::test]
    async fn test_booking_view_shows_estimate_and_message() {
        let mut page = BookingPage::new(FakeBackend::default(), TotalSource::Estimate);
        page.load().await;
        page.update(FormField::RoomId, "1");
        page.update(FormField::CheckIn, "2024-01-01");
        page.update(FormField::CheckOut, "2024-01-04");

        let view = booking_view(&page).unwrap();
        assert!(view.contains("Room: Deluxe Room"));
        assert!(view.contains("Estimated total: ₹6000"));

        page.submit().await;
        let view = booking_view(&page).unwrap();
        assert!(view.contains(messages::BOOKING_INCOMPLETE));
    }

    #[tokio::test]
    async fn test_dashboard_view() {
        let mut page = DashboardPage::new(FakeBackend::default(), StaticToken::new("jwt"));
        page.load().await;

        let view = dashboard_view(&page).unwrap();
        assert!(view.contains("Total Bookings   42"));
        assert!(view.contains("₹315000"));
        assert!(view.contains("Pricing Rules"));

        let mut page = DashboardPage::new(FakeBackend::default(), StaticToken::none());
        page.load().await;
        assert_eq!(dashboard_view(&page).unwrap(), format!("{}\n", messages::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_pricing_view() {
        let mut page = PricingPage::new(FakeBackend::default());
        page.select_room("1");
        page.set_check_in("2024-01-01");
        page.set_check_out("2024-01-04");
        page.check_price().await;

        let view = pricing_view(&page).unwrap();
        assert!(view.contains("Room 1 from 2024-01-01 to 2024-01-04: ₹6600"));
    }

    #[tokio::test]
    async fn test_pricing_view_shows_room_load_failure() {
        let backend = FakeBackend {
            rooms: crate::pages::fake::Reply::Network,
            ..Default::default()
        };
        let mut page = PricingPage::new(backend);
        page.load().await;

        assert_eq!(pricing_view(&page).unwrap(), format!("{}\n", messages::ROOMS_FAILED));
    }
}
