//! Booking Form
//!
//! Immutable form state for the booking page. Every edit goes through
//! [`reduce`], which returns a new state with exactly one field replaced, and
//! the estimated total is computed from the current state on demand rather
//! than stored alongside it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{parse_date, BookingRequest, Room};

/// User-editable booking form. All fields hold raw input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    /// Selected room id; empty when nothing is selected
    pub room_id: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: String,
    pub check_out: String,
    pub adults: String,
    pub children: String,
    pub special_requests: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            room_id: String::new(),
            guest_name: String::new(),
            guest_email: String::new(),
            guest_phone: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            adults: "2".to_string(),
            children: "0".to_string(),
            special_requests: String::new(),
        }
    }
}

/// Form fields, named after the inputs that edit them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    RoomId,
    GuestName,
    GuestEmail,
    GuestPhone,
    CheckIn,
    CheckOut,
    Adults,
    Children,
    SpecialRequests,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::RoomId,
        FormField::GuestName,
        FormField::GuestEmail,
        FormField::GuestPhone,
        FormField::CheckIn,
        FormField::CheckOut,
        FormField::Adults,
        FormField::Children,
        FormField::SpecialRequests,
    ];

    /// Input name used by the web form
    pub fn name(self) -> &'static str {
        match self {
            FormField::RoomId => "room_id",
            FormField::GuestName => "guest_name",
            FormField::GuestEmail => "guest_email",
            FormField::GuestPhone => "guest_phone",
            FormField::CheckIn => "check_in",
            FormField::CheckOut => "check_out",
            FormField::Adults => "adults",
            FormField::Children => "children",
            FormField::SpecialRequests => "special_requests",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            FormField::RoomId => "Room",
            FormField::GuestName => "Full Name",
            FormField::GuestEmail => "Email",
            FormField::GuestPhone => "Phone Number",
            FormField::CheckIn => "Check-in",
            FormField::CheckOut => "Check-out",
            FormField::Adults => "Adults",
            FormField::Children => "Children",
            FormField::SpecialRequests => "Special Requests",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

/// Reasons a form cannot be turned into a booking request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(FormField),

    #[error("{0} is not valid")]
    Invalid(FormField),

    #[error("unknown form field: {0}")]
    UnknownField(String),
}

impl ValidationError {
    pub fn field(&self) -> Option<FormField> {
        match self {
            ValidationError::Missing(field) | ValidationError::Invalid(field) => Some(*field),
            ValidationError::UnknownField(_) => None,
        }
    }
}

/// Replace one field of the form, leaving every other field untouched
pub fn reduce(state: BookingForm, field: FormField, value: impl Into<String>) -> BookingForm {
    let value = value.into();
    match field {
        FormField::RoomId => BookingForm { room_id: value, ..state },
        FormField::GuestName => BookingForm { guest_name: value, ..state },
        FormField::GuestEmail => BookingForm { guest_email: value, ..state },
        FormField::GuestPhone => BookingForm { guest_phone: value, ..state },
        FormField::CheckIn => BookingForm { check_in: value, ..state },
        FormField::CheckOut => BookingForm { check_out: value, ..state },
        FormField::Adults => BookingForm { adults: value, ..state },
        FormField::Children => BookingForm { children: value, ..state },
        FormField::SpecialRequests => BookingForm { special_requests: value, ..state },
    }
}

impl BookingForm {
    /// Current value of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::RoomId => &self.room_id,
            FormField::GuestName => &self.guest_name,
            FormField::GuestEmail => &self.guest_email,
            FormField::GuestPhone => &self.guest_phone,
            FormField::CheckIn => &self.check_in,
            FormField::CheckOut => &self.check_out,
            FormField::Adults => &self.adults,
            FormField::Children => &self.children,
            FormField::SpecialRequests => &self.special_requests,
        }
    }

    /// Selected room id, if the selection is a valid id
    pub fn selected_room_id(&self) -> Option<u64> {
        self.room_id.trim().parse().ok()
    }

    /// Whole nights between the two dates; `None` if either is missing
    pub fn nights(&self) -> Option<i64> {
        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;
        Some((check_out - check_in).num_days())
    }

    /// Validate the form and coerce it into a request body.
    ///
    /// `total_amount` is filled with `total`; callers decide whether that is
    /// the client estimate or a server quote.
    pub fn to_request(&self, total: f64) -> Result<BookingRequest, ValidationError> {
        let room_id = match self.room_id.trim() {
            "" => return Err(ValidationError::Missing(FormField::RoomId)),
            raw => raw
                .parse()
                .map_err(|_| ValidationError::Invalid(FormField::RoomId))?,
        };

        for field in [FormField::GuestName, FormField::GuestEmail, FormField::GuestPhone] {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
        }

        let check_in = required_date(&self.check_in, FormField::CheckIn)?;
        let check_out = required_date(&self.check_out, FormField::CheckOut)?;

        let adults: u32 = self
            .adults
            .trim()
            .parse()
            .map_err(|_| ValidationError::Invalid(FormField::Adults))?;
        if adults < 1 {
            return Err(ValidationError::Invalid(FormField::Adults));
        }
        let children: u32 = self
            .children
            .trim()
            .parse()
            .map_err(|_| ValidationError::Invalid(FormField::Children))?;

        Ok(BookingRequest {
            room_id,
            guest_name: self.guest_name.trim().to_string(),
            guest_email: self.guest_email.trim().to_string(),
            guest_phone: self.guest_phone.trim().to_string(),
            check_in,
            check_out,
            adults,
            children,
            special_requests: self.special_requests.clone(),
            total_amount: total,
        })
    }
}

fn required_date(value: &str, field: FormField) -> Result<chrono::NaiveDate, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(field));
    }
    parse_date(value).ok_or(ValidationError::Invalid(field))
}

/// Advisory total for the current selection.
///
/// Zero unless a known room is selected and check-out falls after check-in.
pub fn estimate_total(form: &BookingForm, rooms: &[Room]) -> f64 {
    let Some(room_id) = form.selected_room_id() else {
        return 0.0;
    };
    let Some(room) = rooms.iter().find(|room| room.id == room_id) else {
        return 0.0;
    };

    match form.nights() {
        Some(nights) if nights > 0 => nights as f64 * room.base_price,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms() -> Vec<Room> {
        vec![
            Room {
                id: 1,
                name: "Deluxe".to_string(),
                base_price: 2000.0,
                max_adults: 2,
                max_children: 1,
                description: None,
            },
            Room {
                id: 2,
                name: "Suite".to_string(),
                base_price: 4500.0,
                max_adults: 4,
                max_children: 2,
                description: None,
            },
        ]
    }

    fn form_with(room: &str, check_in: &str, check_out: &str) -> BookingForm {
        let form = reduce(BookingForm::default(), FormField::RoomId, room);
        let form = reduce(form, FormField::CheckIn, check_in);
        reduce(form, FormField::CheckOut, check_out)
    }

    fn complete_form() -> BookingForm {
        let mut form = form_with("1", "2024-01-01", "2024-01-04");
        for (field, value) in [
            (FormField::GuestName, "Asha Rao"),
            (FormField::GuestEmail, "asha@example.com"),
            (FormField::GuestPhone, "9845000000"),
        ] {
            form = reduce(form, field, value);
        }
        form
    }

    #[test]
    fn test_defaults() {
        let form = BookingForm::default();
        assert_eq!(form.room_id, "");
        assert_eq!(form.adults, "2");
        assert_eq!(form.children, "0");
        assert_eq!(form.special_requests, "");
    }

    #[test]
    fn test_reduce_replaces_only_target_field() {
        let before = complete_form();
        let after = reduce(before.clone(), FormField::GuestPhone, "12345");

        for field in FormField::ALL {
            if field == FormField::GuestPhone {
                assert_eq!(after.get(field), "12345");
            } else {
                assert_eq!(after.get(field), before.get(field), "{} changed", field);
            }
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.name().parse::<FormField>().unwrap(), field);
        }
        assert!("room".parse::<FormField>().is_err());
    }

    #[test]
    fn test_estimate_example() {
        let form = form_with("1", "2024-01-01", "2024-01-04");
        assert_eq!(estimate_total(&form, &rooms()), 6000.0);
    }

    #[test]
    fn test_estimate_uses_selected_room_rate() {
        let form = form_with("2", "2024-02-27", "2024-03-02");
        assert_eq!(estimate_total(&form, &rooms()), 4.0 * 4500.0);
    }

    #[test]
    fn test_estimate_zero_for_non_positive_range() {
        for (check_in, check_out) in [
            ("2024-01-04", "2024-01-04"),
            ("2024-01-04", "2024-01-01"),
            ("2025-06-01", "2024-06-01"),
        ] {
            let form = form_with("1", check_in, check_out);
            assert_eq!(estimate_total(&form, &rooms()), 0.0);
        }
    }

    #[test]
    fn test_estimate_zero_for_incomplete_input() {
        assert_eq!(estimate_total(&form_with("", "2024-01-01", "2024-01-04"), &rooms()), 0.0);
        assert_eq!(estimate_total(&form_with("1", "", "2024-01-04"), &rooms()), 0.0);
        assert_eq!(estimate_total(&form_with("1", "2024-01-01", ""), &rooms()), 0.0);
        assert_eq!(estimate_total(&form_with("1", "not-a-date", "2024-01-04"), &rooms()), 0.0);
        assert_eq!(estimate_total(&form_with("99", "2024-01-01", "2024-01-04"), &rooms()), 0.0);
        assert_eq!(estimate_total(&form_with("1", "2024-01-01", "2024-01-04"), &[]), 0.0);
    }

    #[test]
    fn test_to_request_coerces_numbers() {
        let form = reduce(complete_form(), FormField::Children, "1");
        let request = form.to_request(6000.0).unwrap();

        assert_eq!(request.room_id, 1);
        assert_eq!(request.adults, 2);
        assert_eq!(request.children, 1);
        assert_eq!(request.total_amount, 6000.0);
        assert_eq!(request.check_in.to_string(), "2024-01-01");
    }

    #[test]
    fn test_to_request_reports_first_missing_field() {
        let form = reduce(complete_form(), FormField::GuestEmail, "  ");
        assert_eq!(
            form.to_request(0.0),
            Err(ValidationError::Missing(FormField::GuestEmail))
        );

        let form = reduce(complete_form(), FormField::RoomId, "");
        assert_eq!(
            form.to_request(0.0),
            Err(ValidationError::Missing(FormField::RoomId))
        );
    }

    #[test]
    fn test_to_request_rejects_bad_occupancy() {
        let form = reduce(complete_form(), FormField::Adults, "0");
        assert_eq!(
            form.to_request(0.0),
            Err(ValidationError::Invalid(FormField::Adults))
        );

        let form = reduce(complete_form(), FormField::Children, "-1");
        assert_eq!(
            form.to_request(0.0),
            Err(ValidationError::Invalid(FormField::Children))
        );
    }
}
