//! Backend Data Types
//!
//! View-models for the payloads exchanged with the resort backend. None of
//! these are owned state: rooms and stats are fetched read-only, quotes are
//! replaced wholesale on every lookup, booking requests are built at submit
//! time and discarded.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A bookable room from `GET /rooms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u64,
    pub name: String,
    /// Nightly base rate
    #[serde(deserialize_with = "decimal")]
    pub base_price: f64,
    #[serde(default)]
    pub max_adults: u32,
    #[serde(default)]
    pub max_children: u32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Analytics summary from `GET /admin/analytics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_bookings: u64,
    #[serde(deserialize_with = "decimal")]
    pub total_revenue: f64,
}

/// Parameters of an authoritative price lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingQuery {
    pub room_id: u64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl PricingQuery {
    /// Path of the pricing endpoint, relative to the API base
    pub fn path(&self) -> String {
        format!("/pricing/room/{}/price", self.room_id)
    }

    /// Query string parameters in the order the backend documents them
    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            ("check_in", self.check_in.format(DATE_FORMAT).to_string()),
            ("check_out", self.check_out.format(DATE_FORMAT).to_string()),
        ]
    }
}

/// Server-computed price for a room and date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingQuote {
    pub room_id: u64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(deserialize_with = "decimal")]
    pub total_price: f64,
    pub currency: String,
}

/// Body of `POST /bookings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room_id: u64,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub special_requests: String,
    pub total_amount: f64,
}

impl BookingRequest {
    /// Price lookup covering the same room and stay
    pub fn pricing_query(&self) -> PricingQuery {
        PricingQuery {
            room_id: self.room_id,
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Date format used by form inputs and the backend
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, treating blank or malformed input as absent
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Format an amount the way the pages display it: currency symbol, no
/// decimals for whole amounts.
pub fn format_money(amount: f64, currency: &str) -> String {
    let number = if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    };

    match currency {
        "INR" => format!("₹{}", number),
        "USD" => format!("${}", number),
        "EUR" => format!("€{}", number),
        "GBP" => format!("£{}", number),
        other => format!("{} {}", number, other),
    }
}

/// Currency assumed for catalog prices and estimates
pub const DEFAULT_CURRENCY: &str = "INR";

// Decimal columns come back either as JSON numbers or as strings
fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => {
            let n: f64 = s.trim().parse().map_err(serde::de::Error::custom)?;
            if n.is_finite() {
                Ok(n)
            } else {
                Err(serde::de::Error::custom(format!("non-finite amount {:?}", s)))
            }
        }
    }
}
