//! # Validation Module
//!
//! Input validation for the booking form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Booking Form Fields                                │
//! │                                                                         │
//! │  guestName ─────────► required (blank after trim = missing)            │
//! │  guestPhone ────────► required (blank after trim = missing)            │
//! │  guestEmail ────────► optional (blank = none)                          │
//! │  specialRequests ───► optional (blank = none)                          │
//! │                                                                         │
//! │  Nothing else is checked. The page never validated formats, so a       │
//! │  phone of "123" is accepted.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::ValidationError;
use crate::types::CalendarDate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field names as they appear in the persisted payload and in notices.
pub const FIELD_GUEST_NAME: &str = "guestName";
pub const FIELD_GUEST_PHONE: &str = "guestPhone";

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Returns
/// The trimmed value.
///
/// ## Example
/// ```rust
/// use lodge_core::validation::validate_required;
///
/// assert_eq!(validate_required("guestName", "  Kim ").unwrap(), "Kim");
/// assert!(validate_required("guestName", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(value.to_string())
}

/// Validates the guest name.
pub fn validate_guest_name(name: &str) -> ValidationResult<String> {
    validate_required(FIELD_GUEST_NAME, name)
}

/// Validates the guest phone number.
pub fn validate_guest_phone(phone: &str) -> ValidationResult<String> {
    validate_required(FIELD_GUEST_PHONE, phone)
}

/// Normalizes an optional text field: blank becomes `None`.
pub fn normalize_optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

// =============================================================================
// Date Parsing
// =============================================================================

/// Parses a calendar date.
///
/// ## Accepted Forms
/// - `2024-03-10` (what this crate writes)
/// - `2024-03-10T00:00:00.000Z` and other RFC 3339 date-times
/// - `2024-03-10T00:00:00` (no offset)
///
/// Date-times are reduced to the calendar day written in the string. No
/// time zone conversion happens.
pub fn parse_calendar_date(field: &str, value: &str) -> ValidationResult<CalendarDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.date_naive());
    }

    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(date_time.date());
    }

    Err(ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not a calendar date (expected YYYY-MM-DD)", value),
    })
}
