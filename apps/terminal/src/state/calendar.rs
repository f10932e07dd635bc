//! # Calendar State
//!
//! Everything the visitor is doing right now: the month on screen, the
//! days picked, the half-filled form and the bookings last read from the
//! store.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  startup ──► CalendarState::new(today, store.load())                    │
//! │                    │                                                    │
//! │     prev / next / today ──► displayed month changes                     │
//! │     pick ─────────────────► selection advances (or is rejected)         │
//! │     name / phone / ... ───► form fields change                          │
//! │     submit ───────────────► booking appended, selection + form reset    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use lodge_core::{render_month, Booking, BookingForm, CalendarDate, CalendarView, Selection, YearMonth};

/// The visitor's session.
#[derive(Debug, Clone)]
pub struct CalendarState {
    /// Month on screen.
    pub displayed: YearMonth,

    /// The date treated as today.
    pub today: CalendarDate,

    pub selection: Selection,

    pub form: BookingForm,

    /// Bookings as last read from (or written to) the store.
    pub bookings: Vec<Booking>,
}

impl CalendarState {
    /// Opens on the month containing `today`.
    pub fn new(today: CalendarDate, bookings: Vec<Booking>) -> Self {
        CalendarState {
            displayed: YearMonth::of(today),
            today,
            selection: Selection::Empty,
            form: BookingForm::new(),
            bookings,
        }
    }

    /// Renders the displayed month.
    pub fn view(&self) -> CalendarView {
        render_month(self.displayed, self.today, &self.bookings, &self.selection)
    }

    /// Shows the following month.
    pub fn show_next(&mut self) {
        self.displayed = self.displayed.next();
    }

    /// Shows the preceding month.
    pub fn show_prev(&mut self) {
        self.displayed = self.displayed.prev();
    }

    /// Shows the month containing today.
    pub fn show_today(&mut self) {
        self.displayed = YearMonth::of(self.today);
    }
}
