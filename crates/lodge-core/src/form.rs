//! # Booking Form
//!
//! The pure half of the booking form controller: field state, validation,
//! booking-number generation and turning a complete selection into a
//! [`Booking`]. Persisting the result is the caller's job.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BookingForm::submit(selection, bookings, now)                          │
//! │       │                                                                 │
//! │       ├── name or phone blank? ──► Err(Validation)   (nothing changes)  │
//! │       │                                                                 │
//! │       ├── selection not Complete? ──► Err(IncompleteSelection)          │
//! │       │                                                                 │
//! │       ├── range overlaps a booking? ──► Err(RangeConflict)              │
//! │       │                                  selection reset                │
//! │       ▼                                                                 │
//! │  Booking { booking_number: "BK" + last 8 digits of now (ms), ... }      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  selection reset, form cleared, Ok(booking)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::availability::first_booked_day;
use crate::error::{CoreError, CoreResult};
use crate::selection::Selection;
use crate::types::Booking;
use crate::validation::{normalize_optional, validate_guest_name, validate_guest_phone};

/// Fixed prefix of every booking number.
pub const BOOKING_NUMBER_PREFIX: &str = "BK";

/// How many low-order timestamp digits follow the prefix.
pub const BOOKING_NUMBER_DIGITS: u32 = 8;

/// Generates a booking number from the submit time.
///
/// Collisions are only possible for two submits whose millisecond
/// timestamps agree in their last eight digits.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use lodge_core::form::generate_booking_number;
///
/// let now = Utc.timestamp_millis_opt(1_710_000_123_456).unwrap();
/// assert_eq!(generate_booking_number(now), "BK00123456");
/// ```
pub fn generate_booking_number(now: DateTime<Utc>) -> String {
    let modulus = 10_i64.pow(BOOKING_NUMBER_DIGITS);
    let low = now.timestamp_millis().rem_euclid(modulus);
    format!(
        "{}{:0width$}",
        BOOKING_NUMBER_PREFIX,
        low,
        width = BOOKING_NUMBER_DIGITS as usize
    )
}

/// Form fields a visitor can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    GuestName,
    GuestPhone,
    GuestEmail,
    SpecialRequests,
}

/// The reservation form as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookingForm {
    pub guest_name: String,
    pub guest_phone: String,
    pub guest_email: String,
    pub special_requests: String,
}

impl BookingForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::GuestName => self.guest_name = value,
            FormField::GuestPhone => self.guest_phone = value,
            FormField::GuestEmail => self.guest_email = value,
            FormField::SpecialRequests => self.special_requests = value,
        }
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = BookingForm::default();
    }

    /// Submits the form against the current selection.
    ///
    /// ## Arguments
    /// * `selection` - reset to `Empty` on success and on a range conflict
    /// * `bookings` - the bookings currently known, for a last overlap check
    /// * `now` - submit time, source of the booking number
    ///
    /// ## Returns
    /// The new booking. The form is cleared once it has been built.
    pub fn submit(
        &mut self,
        selection: &mut Selection,
        bookings: &[Booking],
        now: DateTime<Utc>,
    ) -> CoreResult<Booking> {
        let guest_name = validate_guest_name(&self.guest_name)?;
        let guest_phone = validate_guest_phone(&self.guest_phone)?;

        let (start, end) = selection.range().ok_or(CoreError::IncompleteSelection)?;

        if let Some(booked) = first_booked_day(start, end, bookings) {
            selection.reset();
            return Err(CoreError::RangeConflict { start, end, booked });
        }

        let booking = Booking {
            booking_number: generate_booking_number(now),
            start,
            end,
            guest_name,
            guest_phone,
            guest_email: normalize_optional(&self.guest_email),
            special_requests: normalize_optional(&self.special_requests),
        };

        selection.reset();
        self.clear();

        Ok(booking)
    }
}
