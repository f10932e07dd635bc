//! # Booking Commands
//!
//! Filling in the form, submitting it, and listing what is stored.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit                                                                 │
//! │    │                                                                    │
//! │    ├── name or phone blank ──────► VALIDATION_ERROR (nothing stored)    │
//! │    ├── selection not Complete ───► INCOMPLETE_SELECTION                 │
//! │    ├── range now overlaps ───────► RANGE_CONFLICT (selection cleared)   │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  Booking built (BK + 8 digits) ──► pushed onto cache ──► cache saved    │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  selection + form reset, BookingConfirmation returned                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use lodge_core::{Booking, BookingForm, CalendarDate, FormField};

use crate::error::ApiError;
use crate::state::{CalendarState, DbState};

/// What the success view shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_number: String,
    pub check_in: CalendarDate,
    pub check_out: CalendarDate,
    pub nights: i64,
    pub guest_name: String,
}

impl From<&Booking> for BookingConfirmation {
    fn from(booking: &Booking) -> Self {
        BookingConfirmation {
            booking_number: booking.booking_number.clone(),
            check_in: booking.start,
            check_out: booking.end,
            nights: booking.nights(),
            guest_name: booking.guest_name.clone(),
        }
    }
}

/// Overwrites one form field.
///
/// ## Returns
/// The form as it now stands
pub fn set_field(calendar: &mut CalendarState, field: FormField, value: String) -> BookingForm {
    debug!(field = ?field, "set_field command");
    calendar.form.set(field, value);
    calendar.form.clone()
}

/// Submits the form for the current selection.
///
/// ## Arguments
/// * `now` - submit time; the booking number is derived from it
///
/// ## Returns
/// The confirmation for the stored booking
pub async fn submit_booking(
    db: &DbState,
    calendar: &mut CalendarState,
    now: DateTime<Utc>,
) -> Result<BookingConfirmation, ApiError> {
    debug!(selection = ?calendar.selection, "submit_booking command");

    let booking = calendar
        .form
        .submit(&mut calendar.selection, &calendar.bookings, now)?;
    let confirmation = BookingConfirmation::from(&booking);

    db.bookings().append(&mut calendar.bookings, booking).await;

    info!(
        booking_number = %confirmation.booking_number,
        check_in = %confirmation.check_in,
        check_out = %confirmation.check_out,
        "Booking created"
    );

    Ok(confirmation)
}

/// Re-reads the stored bookings and returns them.
///
/// If storage cannot be read, the bookings already known to the session
/// are kept and returned.
pub async fn list_bookings(db: &DbState, calendar: &mut CalendarState) -> Vec<Booking> {
    debug!("list_bookings command");
    match db.bookings().try_load().await {
        Ok(bookings) => calendar.bookings = bookings,
        Err(e) => warn!(
            error = %e,
            known = calendar.bookings.len(),
            "Could not re-read bookings, keeping the known list"
        ),
    }
    calendar.bookings.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::calendar::select_date;
    use crate::error::ErrorCode;
    use chrono::TimeZone;
    use lodge_core::Selection;
    use lodge_db::{Database, DbConfig};

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_710_000_123_456).unwrap()
    }

    async fn db() -> DbState {
        DbState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    fn existing() -> Booking {
        Booking {
            booking_number: "BK00000001".to_string(),
            start: date("2024-03-10"),
            end: date("2024-03-12"),
            guest_name: "Han".to_string(),
            guest_phone: "010".to_string(),
            guest_email: None,
            special_requests: None,
        }
    }

    fn picked(calendar: &mut CalendarState) {
        select_date(calendar, date("2024-03-05")).unwrap();
        select_date(calendar, date("2024-03-09")).unwrap();
    }

    #[tokio::test]
    async fn test_blank_name_stores_nothing() {
        let db = db().await;
        let mut calendar = CalendarState::new(date("2024-03-01"), Vec::new());
        picked(&mut calendar);
        set_field(&mut calendar, FormField::GuestPhone, "123".into());

        let err = submit_booking(&db, &mut calendar, now()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(db.bookings().load().await.is_empty());
        assert!(calendar.selection.is_complete());
    }

    #[tokio::test]
    async fn test_submit_without_range() {
        let db = db().await;
        let mut calendar = CalendarState::new(date("2024-03-01"), Vec::new());
        select_date(&mut calendar, date("2024-03-05")).unwrap();
        set_field(&mut calendar, FormField::GuestName, "A".into());
        set_field(&mut calendar, FormField::GuestPhone, "123".into());

        let err = submit_booking(&db, &mut calendar, now()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::IncompleteSelection);
        assert!(db.bookings().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_appends_one_booking() {
        let db = db().await;
        let mut calendar = CalendarState::new(date("2024-03-01"), Vec::new());
        picked(&mut calendar);
        set_field(&mut calendar, FormField::GuestName, "A".into());
        set_field(&mut calendar, FormField::GuestPhone, "123".into());

        let confirmation = submit_booking(&db, &mut calendar, now()).await.unwrap();

        assert_eq!(confirmation.booking_number, "BK00123456");
        assert_eq!(confirmation.nights, 4);
        assert_eq!(calendar.selection, Selection::Empty);
        assert_eq!(calendar.form, BookingForm::default());

        let stored = db.bookings().load().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].guest_name, "A");
        assert_eq!(stored[0].guest_email, None);
        assert_eq!(calendar.bookings, stored);
    }

    #[tokio::test]
    async fn test_new_booking_blocks_its_days() {
        let db = db().await;
        let mut calendar = CalendarState::new(date("2024-03-01"), Vec::new());
        picked(&mut calendar);
        set_field(&mut calendar, FormField::GuestName, "A".into());
        set_field(&mut calendar, FormField::GuestPhone, "123".into());
        submit_booking(&db, &mut calendar, now()).await.unwrap();

        let err = select_date(&mut calendar, date("2024-03-07")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DateBooked);
    }

    #[tokio::test]
    async fn test_list_bookings_reads_store() {
        let db = db().await;
        let mut calendar = CalendarState::new(date("2024-03-01"), Vec::new());

        db.bookings().save(&[existing()]).await;

        let listed = list_bookings(&db, &mut calendar).await;

        assert_eq!(listed, vec![existing()]);
        assert_eq!(calendar.bookings, listed);
    }

    #[tokio::test]
    async fn test_known_bookings_survive_storage_failure() {
        let db = db().await;
        db.bookings().save(&[existing()]).await;
        let mut calendar = CalendarState::new(date("2024-03-01"), db.bookings().load().await);
        db.inner().close().await;

        select_date(&mut calendar, date("2024-03-05")).unwrap();
        select_date(&mut calendar, date("2024-03-06")).unwrap();
        set_field(&mut calendar, FormField::GuestName, "A".into());
        set_field(&mut calendar, FormField::GuestPhone, "123".into());
        submit_booking(&db, &mut calendar, now()).await.unwrap();

        assert_eq!(calendar.bookings.len(), 2);
        let err = select_date(&mut calendar, date("2024-03-11")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DateBooked);

        let listed = list_bookings(&db, &mut calendar).await;
        assert_eq!(listed.len(), 2);
        let err = select_date(&mut calendar, date("2024-03-05")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DateBooked);
    }
}
