//! # Calendar Commands
//!
//! Month navigation and day picking.
//!
//! ## Picking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Lifecycle                                  │
//! │                                                                         │
//! │  ┌──────────┐  pick   ┌──────────────┐  pick   ┌──────────┐            │
//! │  │  Empty   │────────►│ PartialStart │────────►│ Complete │            │
//! │  └──────────┘         └──────────────┘         └──────────┘            │
//! │       ▲                      │                      │                   │
//! │       │     range conflict   │       pick           │                   │
//! │       └──────────────────────┘  (starts over) ◄─────┘                   │
//! │       │                                             │                   │
//! │       └──────── clear_selection / submit ───────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the freshly rendered month.

use tracing::debug;

use lodge_core::{CalendarDate, CalendarView, DayStatus};

use crate::error::ApiError;
use crate::state::CalendarState;

/// Renders the displayed month.
pub fn get_calendar(calendar: &CalendarState) -> CalendarView {
    debug!(month = %calendar.displayed, "get_calendar command");
    calendar.view()
}

/// Moves to the following month.
pub fn next_month(calendar: &mut CalendarState) -> CalendarView {
    calendar.show_next();
    debug!(month = %calendar.displayed, "next_month command");
    calendar.view()
}

/// Moves to the preceding month.
pub fn prev_month(calendar: &mut CalendarState) -> CalendarView {
    calendar.show_prev();
    debug!(month = %calendar.displayed, "prev_month command");
    calendar.view()
}

/// Moves back to the month containing today.
pub fn go_today(calendar: &mut CalendarState) -> CalendarView {
    calendar.show_today();
    debug!(month = %calendar.displayed, "go_today command");
    calendar.view()
}

/// Picks `date` as check-in or check-out.
///
/// ## Behavior
/// - Only days the displayed month offers are accepted: days of other
///   months and past days are `NOT_SELECTABLE`
/// - A booked day is refused and the selection stays as it was
/// - A range over a booked day is refused and the selection is cleared
///
/// ## Returns
/// The month re-rendered with the new selection
pub fn select_date(calendar: &mut CalendarState, date: CalendarDate) -> Result<CalendarView, ApiError> {
    debug!(date = %date, "select_date command");

    let status = calendar.view().cell(date).map(|cell| cell.status);
    match status {
        None | Some(DayStatus::OtherMonth) => {
            return Err(ApiError::not_selectable(format!(
                "{} is not in {}",
                date,
                calendar.displayed.title()
            )));
        }
        Some(DayStatus::Past) => {
            return Err(ApiError::not_selectable(format!("{} is in the past", date)));
        }
        Some(DayStatus::Booked) | Some(DayStatus::Available) => {}
    }

    calendar.selection.select_date(date, &calendar.bookings)?;
    Ok(calendar.view())
}

/// Drops the current selection.
pub fn clear_selection(calendar: &mut CalendarState) -> CalendarView {
    debug!("clear_selection command");
    calendar.selection.reset();
    calendar.view()
}
