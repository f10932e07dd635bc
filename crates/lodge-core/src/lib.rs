//! # lodge-core: Pure Booking Logic for Lodge
//!
//! This crate holds the booking calendar's logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lodge Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal front-end                           │   │
//! │  │    Calendar ──► Pick days ──► Fill form ──► Confirmation        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lodge-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ selection │  │ calendar  │  │   form    │  │   │
//! │  │   │  Booking  │  │   Empty   │  │ DayCell   │  │  submit   │  │   │
//! │  │   │ YearMonth │  │  Partial  │  │ 6×7 grid  │  │ BK number │  │   │
//! │  │   └───────────┘  │  Complete │  └───────────┘  └───────────┘  │   │
//! │  │                  └───────────┘                                  │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    lodge-db (Booking Store)                     │   │
//! │  │              one key, one JSON array of bookings                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Booking, CalendarDate, YearMonth
//! - [`availability`] - Inclusive day-overlap checks
//! - [`selection`] - The date-range selection state machine
//! - [`calendar`] - Month grid view model
//! - [`form`] - Booking form and booking-number generation
//! - [`validation`] - Field and date validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use lodge_core::{Booking, Selection};
//!
//! let bookings = vec![Booking {
//!     booking_number: "BK00000001".into(),
//!     start: "2024-03-10".parse().unwrap(),
//!     end: "2024-03-12".parse().unwrap(),
//!     guest_name: "Kim".into(),
//!     guest_phone: "010".into(),
//!     guest_email: None,
//!     special_requests: None,
//! }];
//!
//! let mut selection = Selection::default();
//! selection.select_date("2024-03-05".parse().unwrap(), &bookings).unwrap();
//! selection.select_date("2024-03-09".parse().unwrap(), &bookings).unwrap();
//! assert_eq!(selection.nights(), Some(4));
//!
//! // A range across the booking is rejected and starts over
//! selection.select_date("2024-03-05".parse().unwrap(), &bookings).unwrap();
//! assert!(selection.select_date("2024-03-15".parse().unwrap(), &bookings).is_err());
//! assert!(selection.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod calendar;
pub mod error;
pub mod form;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use availability::{first_booked_day, is_booked};
pub use calendar::{render_month, CalendarView, DayCell, DayStatus, SelectionSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use form::{generate_booking_number, BookingForm, FormField, BOOKING_NUMBER_PREFIX};
pub use selection::Selection;
pub use types::*;
