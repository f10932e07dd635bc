//! # Text Drawing
//!
//! Turns view models into the text printed under the prompt. Nothing here
//! touches state; every function returns a `String`.
//!
//! ## Month Layout
//! ```text
//! Lodge · 2024년 3월
//!  일  월  화  수  목  금  토
//!                       --  2
//!   3   4 [ 5]- 6-[ 7]  8   9
//! *10**11**12* 13  14  15  16
//! ...
//! ```
//!
//! Each cell is four columns wide.

use std::fmt::Write;

use lodge_core::{Booking, BookingForm, CalendarView, DayCell, DayStatus};

use crate::commands::booking::BookingConfirmation;
use crate::state::ConfigState;

/// Legend printed under the grid.
pub const LEGEND: &str = "[d] check-in/out  -d- stay  *d* booked  -- past";

/// Draws one cell.
fn cell_text(cell: &DayCell) -> String {
    match cell.status {
        DayStatus::OtherMonth => "    ".to_string(),
        DayStatus::Past => "  --".to_string(),
        DayStatus::Booked => format!("*{:>2}*", cell.day),
        DayStatus::Available if cell.selected => format!("[{:>2}]", cell.day),
        DayStatus::Available if cell.in_range => format!("-{:>2}-", cell.day),
        DayStatus::Available => format!(" {:>2} ", cell.day),
    }
}

/// Draws the month grid with its title, header row and legend.
pub fn render_calendar(view: &CalendarView, config: &ConfigState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} · {}", config.property_name, view.title);

    let header: String = view
        .weekday_labels
        .iter()
        .map(|label| format!(" {} ", label))
        .collect();
    let _ = writeln!(out, "{}", header.trim_end());

    for week in view.weeks() {
        let line: String = week.iter().map(cell_text).collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = writeln!(out, "{}", LEGEND);
    out
}

/// Draws the form panel: picked dates and typed fields.
pub fn render_form(view: &CalendarView, form: &BookingForm) -> String {
    let mut out = String::new();
    let summary = &view.selection;

    let show = |d: Option<lodge_core::CalendarDate>| {
        d.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
    };

    let _ = writeln!(out, "Check-in:  {}", show(summary.check_in));
    let _ = writeln!(out, "Check-out: {}", show(summary.check_out));
    if let Some(nights) = summary.nights {
        let _ = writeln!(out, "Nights:    {}", nights);
    }
    let _ = writeln!(out, "Name:      {}", form.guest_name);
    let _ = writeln!(out, "Phone:     {}", form.guest_phone);
    let _ = writeln!(out, "Email:     {}", form.guest_email);
    let _ = writeln!(out, "Requests:  {}", form.special_requests);
    out
}

/// Draws the success view.
pub fn render_confirmation(confirmation: &BookingConfirmation, config: &ConfigState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Booking confirmed at {}", config.property_name);
    let _ = writeln!(out, "  Booking number: {}", confirmation.booking_number);
    let _ = writeln!(out, "  Guest:          {}", confirmation.guest_name);
    let _ = writeln!(
        out,
        "  Stay:           {} → {} ({} nights)",
        confirmation.check_in, confirmation.check_out, confirmation.nights
    );
    out
}

/// Draws the stored bookings, one per line.
pub fn render_bookings(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return "No bookings yet.\n".to_string();
    }

    let mut out = String::new();
    for booking in bookings {
        let _ = writeln!(
            out,
            "{}  {} → {}  {:>2} nights  {} ({})",
            booking.booking_number,
            booking.start,
            booking.end,
            booking.nights(),
            booking.guest_name,
            booking.guest_phone
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodge_core::{render_month, CalendarDate, Selection, YearMonth};

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn march_view(selection: &Selection) -> CalendarView {
        let bookings = vec![Booking {
            booking_number: "BK00000001".to_string(),
            start: date("2024-03-10"),
            end: date("2024-03-12"),
            guest_name: "Han".to_string(),
            guest_phone: "010".to_string(),
            guest_email: None,
            special_requests: None,
        }];
        render_month(
            YearMonth::new(2024, 3).unwrap(),
            date("2024-03-02"),
            &bookings,
            selection,
        )
    }

    #[test]
    fn test_calendar_lines() {
        let selection = Selection::Complete {
            start: date("2024-03-05"),
            end: date("2024-03-07"),
        };
        let text = render_calendar(&march_view(&selection), &ConfigState::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Lodge · 2024년 3월");
        assert_eq!(lines[1], " 일  월  화  수  목  금  토");
        assert_eq!(lines[2], format!("{}--  2", " ".repeat(22)));
        assert_eq!(lines[3], "  3   4 [ 5]- 6-[ 7]  8   9");
        assert!(lines[4].starts_with("*10**11**12*"));
        assert_eq!(lines.len(), 2 + 6 + 1);
        assert_eq!(*lines.last().unwrap(), LEGEND);
    }

    #[test]
    fn test_form_panel() {
        let selection = Selection::PartialStart {
            start: date("2024-03-05"),
        };
        let mut form = BookingForm::new();
        form.guest_name = "A".to_string();

        let text = render_form(&march_view(&selection), &form);

        assert!(text.contains("Check-in:  2024-03-05"));
        assert!(text.contains("Check-out: -"));
        assert!(!text.contains("Nights"));
        assert!(text.contains("Name:      A"));
    }

    #[test]
    fn test_confirmation_shows_number() {
        let confirmation = BookingConfirmation {
            booking_number: "BK00123456".to_string(),
            check_in: date("2024-03-05"),
            check_out: date("2024-03-09"),
            nights: 4,
            guest_name: "A".to_string(),
        };

        let text = render_confirmation(&confirmation, &ConfigState::default());

        assert!(text.contains("Booking number: BK00123456"));
        assert!(text.contains("(4 nights)"));
    }

    #[test]
    fn test_empty_booking_list() {
        assert_eq!(render_bookings(&[]), "No bookings yet.\n");
    }
}
