//! # Calendar Renderer
//!
//! Builds the declarative view of one month. Drawing it is left to the
//! front-end.
//!
//! ## Grid Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         2024년 3월                                      │
//! │                                                                         │
//! │   일    월    화    수    목    금    토      ◄── header row (7 labels)  │
//! │   25    26    27    28    29  │  1     2      ◄── leading: tail of Feb   │
//! │    3     4     5     6     7     8     9                                │
//! │   10    11    12    13    14    15    16                                │
//! │   ...                                                                   │
//! │   31  │  1     2     3     4     5     6      ◄── trailing: head of Apr  │
//! │                                                                         │
//! │  leading  = weekday of the 1st (Sunday = 0)                             │
//! │  trailing = min(42 - leading - days_in_month, 14)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cell Classification (first match wins)
//! 1. `OtherMonth` - day belongs to the previous or next month
//! 2. `Past` - before today
//! 3. `Booked` - inside a booking; not clickable
//! 4. `Available` - clickable, may be `selected` (check-in/check-out) or
//!    `in_range` (strictly between them)

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::availability::is_booked;
use crate::selection::Selection;
use crate::types::{Booking, CalendarDate, YearMonth};

/// Weekday labels in the page's locale, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Day cells in a full six-week grid.
pub const GRID_CELLS: usize = 42;

/// Upper bound on days shown from the next month.
pub const MAX_TRAILING_DAYS: usize = 14;

// =============================================================================
// View Types
// =============================================================================

/// Visual state of a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum DayStatus {
    OtherMonth,
    Past,
    Booked,
    Available,
}

/// One day in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DayCell {
    #[ts(as = "String")]
    pub date: CalendarDate,

    /// Day of month shown in the cell.
    pub day: u32,

    pub status: DayStatus,

    /// Check-in or check-out day of the current selection.
    pub selected: bool,

    /// Strictly between check-in and check-out.
    pub in_range: bool,
}

impl DayCell {
    /// Only available days accept clicks.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.status == DayStatus::Available
    }
}

/// What the booking form panel shows about the current pick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SelectionSummary {
    #[ts(as = "Option<String>")]
    pub check_in: Option<CalendarDate>,

    #[ts(as = "Option<String>")]
    pub check_out: Option<CalendarDate>,

    pub nights: Option<i64>,
}

impl From<&Selection> for SelectionSummary {
    fn from(selection: &Selection) -> Self {
        SelectionSummary {
            check_in: selection.start(),
            check_out: selection.end(),
            nights: selection.nights(),
        }
    }
}

/// The whole calendar for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalendarView {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weekday_labels: Vec<String>,
    pub cells: Vec<DayCell>,
    pub selection: SelectionSummary,
}

impl CalendarView {
    /// Cells grouped into weeks of seven.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(WEEKDAY_LABELS.len())
    }

    /// Finds the cell for `date`, if it is on the grid.
    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.date == date)
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders `month` as seen on `today`.
///
/// Pure: the same inputs always give the same view.
pub fn render_month(
    month: YearMonth,
    today: CalendarDate,
    bookings: &[Booking],
    selection: &Selection,
) -> CalendarView {
    let first = month.first_day();
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days_in_month = month.days_in_month() as usize;
    let trailing = GRID_CELLS
        .saturating_sub(leading + days_in_month)
        .min(MAX_TRAILING_DAYS);

    let mut cells = Vec::with_capacity(leading + days_in_month + trailing);

    // Tail of the previous month
    let leading_start = first - chrono::Days::new(leading as u64);
    for date in leading_start.iter_days().take(leading) {
        cells.push(other_month_cell(date));
    }

    for date in month.days() {
        cells.push(month_cell(date, today, bookings, selection));
    }

    // Head of the next month
    let next_first = month.next().first_day();
    for date in next_first.iter_days().take(trailing) {
        cells.push(other_month_cell(date));
    }

    CalendarView {
        year: month.year(),
        month: month.month(),
        title: month.title(),
        weekday_labels: WEEKDAY_LABELS.iter().map(|s| s.to_string()).collect(),
        cells,
        selection: SelectionSummary::from(selection),
    }
}

fn other_month_cell(date: CalendarDate) -> DayCell {
    DayCell {
        date,
        day: date.day(),
        status: DayStatus::OtherMonth,
        selected: false,
        in_range: false,
    }
}

fn month_cell(
    date: CalendarDate,
    today: CalendarDate,
    bookings: &[Booking],
    selection: &Selection,
) -> DayCell {
    let status = if date < today {
        DayStatus::Past
    } else if is_booked(date, bookings) {
        DayStatus::Booked
    } else {
        DayStatus::Available
    };

    let available = status == DayStatus::Available;

    DayCell {
        date,
        day: date.day(),
        status,
        selected: available && selection.is_endpoint(date),
        in_range: available && selection.is_inside(date),
    }
}
