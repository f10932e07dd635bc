//! # Domain Types
//!
//! Core domain types used throughout Lodge.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │      Booking        │   │  CalendarDate   │   │   YearMonth     │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  booking_number     │   │  NaiveDate      │   │  first day of   │   │
//! │  │  start ≤ end        │   │  day precision  │   │  shown month    │   │
//! │  │  guest details      │   │  no time of day │   │  prev / next    │   │
//! │  └─────────────────────┘   └─────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted Shape
//! Bookings are stored as a JSON array with camelCase keys:
//! ```json
//! [{"bookingNumber":"BK12345678","start":"2024-03-10","end":"2024-03-12",
//!   "guestName":"Kim","guestPhone":"010-0000-0000",
//!   "guestEmail":null,"specialRequests":null}]
//! ```

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::validation::parse_calendar_date;

/// A day-granularity date. Equality is by calendar day.
pub type CalendarDate = NaiveDate;

/// Number of nights between a check-in and a check-out day.
///
/// ```rust
/// use chrono::NaiveDate;
/// use lodge_core::types::nights_between;
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(nights_between(check_in, check_out), 4);
/// ```
pub fn nights_between(start: CalendarDate, end: CalendarDate) -> i64 {
    (end - start).num_days()
}

// =============================================================================
// Booking
// =============================================================================

/// A persisted reservation spanning an inclusive date range.
///
/// ## Invariants
/// - `start <= end`
/// - Never mutated or deleted once stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Booking {
    /// Generated booking number, e.g. `BK12345678`.
    pub booking_number: String,

    /// Check-in day.
    #[serde(deserialize_with = "deserialize_calendar_date")]
    #[ts(as = "String")]
    pub start: CalendarDate,

    /// Check-out day. Blocked for new check-ins as well.
    #[serde(deserialize_with = "deserialize_calendar_date")]
    #[ts(as = "String")]
    pub end: CalendarDate,

    pub guest_name: String,

    pub guest_phone: String,

    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub guest_email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub special_requests: Option<String>,
}

impl Booking {
    /// Checks if the booking's inclusive range covers `date`.
    #[inline]
    pub fn covers(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the number of nights of the stay.
    #[inline]
    pub fn nights(&self) -> i64 {
        nights_between(self.start, self.end)
    }
}

/// Accepts both plain dates and browser-style ISO date-times.
fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<CalendarDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date("date", &raw).map_err(serde::de::Error::custom)
}

fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

// =============================================================================
// Year / Month
// =============================================================================

/// The month shown by the calendar.
///
/// Internally this is the first day of the month, so every value is a real
/// month chrono can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Creates a YearMonth, or `None` if the month is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(YearMonth)
    }

    /// The month containing `date`.
    pub fn of(date: CalendarDate) -> Self {
        YearMonth(date - chrono::Days::new(u64::from(date.day0())))
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// First day of the month.
    #[inline]
    pub fn first_day(&self) -> CalendarDate {
        self.0
    }

    /// Every day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        let month = self.month();
        self.0.iter_days().take_while(move |d| d.month() == month)
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.days().count() as u32
    }

    /// Checks if `date` falls in this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The previous month. Stays put at chrono's lower bound.
    pub fn prev(&self) -> Self {
        self.0
            .checked_sub_months(Months::new(1))
            .map(YearMonth)
            .unwrap_or(*self)
    }

    /// The next month. Stays put at chrono's upper bound.
    pub fn next(&self) -> Self {
        self.0
            .checked_add_months(Months::new(1))
            .map(YearMonth)
            .unwrap_or(*self)
    }

    /// Calendar heading in the page's locale, e.g. `2024년 3월`.
    pub fn title(&self) -> String {
        format!("{}년 {}월", self.year(), self.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
