//! # Selection State Machine
//!
//! Tracks the date range a visitor is picking before they submit the form.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Transitions                                │
//! │                                                                         │
//! │  ┌──────────┐  pick d   ┌──────────────┐  pick d   ┌──────────────┐    │
//! │  │  Empty   │─────────►│ PartialStart │─────────►│   Complete   │    │
//! │  └──────────┘          │   start = d  │          │ start ≤ end  │    │
//! │       ▲                └──────────────┘          └──────┬───────┘    │
//! │       │                        │                        │            │
//! │       │     range overlaps     │        pick d          │            │
//! │       └────── a booking ───────┘   (starts over) ───────┘            │
//! │       │                                                               │
//! │       └──────────── submit / clear ◄──────────── Complete             │
//! │                                                                         │
//! │  Picking a booked day is rejected in every state and changes nothing.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::availability::{first_booked_day, is_booked};
use crate::error::{CoreError, CoreResult};
use crate::types::{nights_between, Booking, CalendarDate};

/// The in-progress, not-yet-submitted date range.
///
/// ## Invariants
/// - `Complete` always has `start <= end`
/// - There is no way to hold an end without a start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing picked yet.
    #[default]
    Empty,
    /// Check-in picked, waiting for check-out.
    PartialStart { start: CalendarDate },
    /// Both days picked and the whole range is free.
    Complete {
        start: CalendarDate,
        end: CalendarDate,
    },
}

impl Selection {
    /// Handles a click on `date`.
    ///
    /// ## Behavior
    /// - `date` is booked: `Err(DateBooked)`, state unchanged
    /// - From `Empty` or `Complete`: starts a new range at `date`
    /// - From `PartialStart`: completes the range, swapping the ends if
    ///   `date` comes first. If any day of the range is booked the selection
    ///   resets to `Empty` and `Err(RangeConflict)` is returned
    ///
    /// ## Returns
    /// The new state on success.
    pub fn select_date(&mut self, date: CalendarDate, bookings: &[Booking]) -> CoreResult<Selection> {
        if is_booked(date, bookings) {
            return Err(CoreError::DateBooked { date });
        }

        let next = match *self {
            Selection::Empty | Selection::Complete { .. } => Selection::PartialStart { start: date },
            Selection::PartialStart { start } => {
                let (start, end) = if date < start {
                    (date, start)
                } else {
                    (start, date)
                };

                if let Some(booked) = first_booked_day(start, end, bookings) {
                    *self = Selection::Empty;
                    return Err(CoreError::RangeConflict { start, end, booked });
                }

                Selection::Complete { start, end }
            }
        };

        *self = next;
        Ok(next)
    }

    /// Drops the selection back to `Empty`.
    pub fn reset(&mut self) {
        *self = Selection::Empty;
    }

    /// Check-in day, if picked.
    pub fn start(&self) -> Option<CalendarDate> {
        match *self {
            Selection::Empty => None,
            Selection::PartialStart { start } | Selection::Complete { start, .. } => Some(start),
        }
    }

    /// Check-out day, if picked.
    pub fn end(&self) -> Option<CalendarDate> {
        match *self {
            Selection::Complete { end, .. } => Some(end),
            _ => None,
        }
    }

    /// Both days of a complete selection.
    pub fn range(&self) -> Option<(CalendarDate, CalendarDate)> {
        match *self {
            Selection::Complete { start, end } => Some((start, end)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, Selection::Complete { .. })
    }

    /// Nights of a complete selection.
    pub fn nights(&self) -> Option<i64> {
        self.range().map(|(start, end)| nights_between(start, end))
    }

    /// Checks if `date` is the check-in or check-out day.
    pub fn is_endpoint(&self, date: CalendarDate) -> bool {
        self.start() == Some(date) || self.end() == Some(date)
    }

    /// Checks if `date` lies strictly between check-in and check-out.
    pub fn is_inside(&self, date: CalendarDate) -> bool {
        self.range()
            .is_some_and(|(start, end)| start < date && date < end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn march_booking() -> Vec<Booking> {
        vec![Booking {
            booking_number: "BK00000010".to_string(),
            start: date("2024-03-10"),
            end: date("2024-03-12"),
            guest_name: "Park".to_string(),
            guest_phone: "010".to_string(),
            guest_email: None,
            special_requests: None,
        }]
    }

    #[test]
    fn test_booked_day_is_rejected_without_state_change() {
        let bookings = march_booking();

        let mut selection = Selection::Empty;
        let err = selection.select_date(date("2024-03-11"), &bookings).unwrap_err();
        assert_eq!(err, CoreError::DateBooked { date: date("2024-03-11") });
        assert_eq!(selection, Selection::Empty);

        let mut selection = Selection::PartialStart { start: date("2024-03-05") };
        assert!(selection.select_date(date("2024-03-12"), &bookings).is_err());
        assert_eq!(selection, Selection::PartialStart { start: date("2024-03-05") });

        let complete = Selection::Complete {
            start: date("2024-03-01"),
            end: date("2024-03-03"),
        };
        let mut selection = complete;
        assert!(selection.select_date(date("2024-03-10"), &bookings).is_err());
        assert_eq!(selection, complete);
    }

    #[test]
    fn test_free_range_completes() {
        let bookings = march_booking();
        let mut selection = Selection::default();

        selection.select_date(date("2024-03-05"), &bookings).unwrap();
        assert_eq!(selection, Selection::PartialStart { start: date("2024-03-05") });

        let state = selection.select_date(date("2024-03-09"), &bookings).unwrap();
        assert_eq!(
            state,
            Selection::Complete {
                start: date("2024-03-05"),
                end: date("2024-03-09"),
            }
        );
        assert_eq!(selection.nights(), Some(4));
    }

    #[test]
    fn test_reverse_click_order_swaps() {
        let mut selection = Selection::Empty;
        selection.select_date(date("2024-03-09"), &[]).unwrap();
        selection.select_date(date("2024-03-05"), &[]).unwrap();
        assert_eq!(selection.range(), Some((date("2024-03-05"), date("2024-03-09"))));
    }

    #[test]
    fn test_range_over_booking_resets() {
        let bookings = march_booking();
        let mut selection = Selection::Empty;

        selection.select_date(date("2024-03-05"), &bookings).unwrap();
        let err = selection.select_date(date("2024-03-15"), &bookings).unwrap_err();

        assert_eq!(
            err,
            CoreError::RangeConflict {
                start: date("2024-03-05"),
                end: date("2024-03-15"),
                booked: date("2024-03-10"),
            }
        );
        assert_eq!(selection, Selection::Empty);
        assert_eq!(bookings.len(), 1);
    }

    #[test]
    fn test_reversed_range_over_booking_resets() {
        let bookings = march_booking();
        let mut selection = Selection::Empty;

        selection.select_date(date("2024-03-20"), &bookings).unwrap();
        assert!(selection.select_date(date("2024-03-01"), &bookings).is_err());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_pick_after_complete_starts_over() {
        let mut selection = Selection::Complete {
            start: date("2024-03-01"),
            end: date("2024-03-03"),
        };
        selection.select_date(date("2024-03-20"), &[]).unwrap();
        assert_eq!(selection, Selection::PartialStart { start: date("2024-03-20") });
        assert_eq!(selection.end(), None);
        assert_eq!(selection.nights(), None);
    }

    #[test]
    fn test_same_day_twice_is_zero_nights() {
        let mut selection = Selection::Empty;
        selection.select_date(date("2024-03-05"), &[]).unwrap();
        selection.select_date(date("2024-03-05"), &[]).unwrap();
        assert!(selection.is_complete());
        assert_eq!(selection.nights(), Some(0));
    }

    #[test]
    fn test_endpoint_and_inside() {
        let selection = Selection::Complete {
            start: date("2024-03-05"),
            end: date("2024-03-08"),
        };
        assert!(selection.is_endpoint(date("2024-03-05")));
        assert!(selection.is_endpoint(date("2024-03-08")));
        assert!(!selection.is_inside(date("2024-03-05")));
        assert!(selection.is_inside(date("2024-03-06")));
        assert!(selection.is_inside(date("2024-03-07")));
        assert!(!selection.is_inside(date("2024-03-09")));

        let partial = Selection::PartialStart { start: date("2024-03-05") };
        assert!(partial.is_endpoint(date("2024-03-05")));
        assert!(!partial.is_inside(date("2024-03-06")));
    }

    #[test]
    fn test_any_free_pair_completes_in_order() {
        let bookings = march_booking();
        let free: Vec<CalendarDate> = date("2024-03-01")
            .iter_days()
            .take(9)
            .collect();

        for &a in &free {
            for &b in &free {
                let mut selection = Selection::Empty;
                selection.select_date(a, &bookings).unwrap();
                selection.select_date(b, &bookings).unwrap();
                let (start, end) = selection.range().unwrap();
                assert!(start <= end);
                assert_eq!((start, end), (a.min(b), a.max(b)));
            }
        }
    }
}
