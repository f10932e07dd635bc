//! # Availability
//!
//! Day-overlap checks against the stored bookings.
//!
//! A day is booked iff some booking has `start <= day <= end`. Both ends are
//! inclusive, so a guest's check-out day cannot be another guest's
//! check-in day.

use crate::types::{Booking, CalendarDate};

/// Checks if `date` falls inside any booking's inclusive range.
///
/// ## Example
/// ```rust
/// use lodge_core::{is_booked, Booking};
///
/// let booking = Booking {
///     booking_number: "BK00000001".into(),
///     start: "2024-03-10".parse().unwrap(),
///     end: "2024-03-12".parse().unwrap(),
///     guest_name: "Kim".into(),
///     guest_phone: "010".into(),
///     guest_email: None,
///     special_requests: None,
/// };
///
/// assert!(is_booked("2024-03-12".parse().unwrap(), &[booking.clone()]));
/// assert!(!is_booked("2024-03-13".parse().unwrap(), &[booking]));
/// ```
pub fn is_booked(date: CalendarDate, bookings: &[Booking]) -> bool {
    bookings.iter().any(|b| b.covers(date))
}

/// Returns the first booked day in `start..=end`, scanning day by day.
pub fn first_booked_day(
    start: CalendarDate,
    end: CalendarDate,
    bookings: &[Booking],
) -> Option<CalendarDate> {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .find(|day| is_booked(*day, bookings))
}
