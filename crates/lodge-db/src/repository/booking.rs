//! # Booking Store
//!
//! The flat list of bookings, kept as one JSON array under one key.
//!
//! ## Failure Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Store Operations                             │
//! │                                                                         │
//! │  load()            key missing ─────────► []                            │
//! │                    JSON corrupt ────────► [] + warn!                    │
//! │                    database down ───────► [] + warn!                    │
//! │                                                                         │
//! │  save(bookings)    replaces the whole array                             │
//! │                    any failure ─────────► error! (caller carries on)    │
//! │                                                                         │
//! │  append(known, b)  push onto the caller's list + save; never re-reads   │
//! │                                                                         │
//! │  try_load / try_save expose the underlying DbError for diagnostics.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no indexing, no uniqueness check and no payload versioning.

use tracing::{debug, error, warn};

use lodge_core::Booking;

use crate::error::{DbError, DbResult};
use crate::repository::kv::KvRepository;

/// Default key holding the booking array.
pub const DEFAULT_BOOKINGS_KEY: &str = "bookings";

/// Reads and writes the booking list.
#[derive(Debug, Clone)]
pub struct BookingStore {
    kv: KvRepository,
    key: String,
}

impl BookingStore {
    /// Creates a store over `kv` using `key`.
    pub fn new(kv: KvRepository, key: impl Into<String>) -> Self {
        BookingStore {
            kv,
            key: key.into(),
        }
    }

    /// The key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the persisted bookings, in stored order.
    ///
    /// Never fails: absent, corrupt or unreachable storage reads as an
    /// empty list.
    pub async fn load(&self) -> Vec<Booking> {
        match self.try_load().await {
            Ok(bookings) => bookings,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Could not load bookings, starting empty");
                Vec::new()
            }
        }
    }

    /// Loads the persisted bookings, reporting why if that is impossible.
    pub async fn try_load(&self) -> DbResult<Vec<Booking>> {
        let Some(raw) = self.kv.get(&self.key).await? else {
            debug!(key = %self.key, "No bookings stored yet");
            return Ok(Vec::new());
        };

        let bookings: Vec<Booking> =
            serde_json::from_str(&raw).map_err(|e| DbError::corrupt(&self.key, e))?;

        debug!(key = %self.key, count = bookings.len(), "Bookings loaded");
        Ok(bookings)
    }

    /// Persists `bookings`, replacing what was stored.
    ///
    /// Failures are logged and swallowed.
    pub async fn save(&self, bookings: &[Booking]) {
        if let Err(e) = self.try_save(bookings).await {
            error!(key = %self.key, count = bookings.len(), error = %e, "Could not save bookings");
        }
    }

    /// Persists `bookings`, returning any failure.
    pub async fn try_save(&self, bookings: &[Booking]) -> DbResult<()> {
        let raw = serde_json::to_string(bookings).map_err(|e| DbError::corrupt(&self.key, e))?;
        self.kv.set(&self.key, &raw).await?;

        debug!(key = %self.key, count = bookings.len(), "Bookings saved");
        Ok(())
    }

    /// Adds one booking to `bookings` and persists the whole list.
    ///
    /// `bookings` is the list the caller already holds. Storage is not read
    /// back, so a store that fails mid-session cannot shrink it; the save
    /// itself is fail-soft like [`save`](Self::save).
    pub async fn append(&self, bookings: &mut Vec<Booking>, booking: Booking) {
        debug!(
            booking_number = %booking.booking_number,
            known = bookings.len(),
            "Appending booking"
        );
        bookings.push(booking);
        self.save(bookings).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use lodge_core::CalendarDate;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn booking(number: &str, start: &str, end: &str) -> Booking {
        Booking {
            booking_number: number.to_string(),
            start: date(start),
            end: date(end),
            guest_name: "Choi".to_string(),
            guest_phone: "010-2222-3333".to_string(),
            guest_email: Some("choi@example.com".to_string()),
            special_requests: None,
        }
    }

    async fn store() -> (Database, BookingStore) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = db.bookings();
        (db, store)
    }

    #[tokio::test]
    async fn test_load_empty_when_absent() {
        let (_db, store) = store().await;
        assert!(store.load().await.is_empty());
        assert_eq!(store.key(), DEFAULT_BOOKINGS_KEY);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let (_db, store) = store().await;
        let bookings = vec![
            booking("BK00000001", "2024-03-10", "2024-03-12"),
            booking("BK00000002", "2024-03-01", "2024-03-03"),
        ];

        store.save(&bookings).await;

        assert_eq!(store.load().await, bookings);
    }

    #[tokio::test]
    async fn test_save_replaces_prior_content() {
        let (_db, store) = store().await;
        store.save(&[booking("BK1", "2024-03-10", "2024-03-12")]).await;
        store.save(&[]).await;

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let (_db, store) = store().await;

        let mut known = store.load().await;
        store.append(&mut known, booking("BK00000001", "2024-03-10", "2024-03-12")).await;
        store.append(&mut known, booking("BK00000002", "2024-03-01", "2024-03-03")).await;

        let numbers: Vec<String> = store
            .load()
            .await
            .into_iter()
            .map(|b| b.booking_number)
            .collect();
        assert_eq!(numbers, vec!["BK00000001", "BK00000002"]);
        assert_eq!(known.len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_payload_loads_empty() {
        let (db, store) = store().await;
        db.kv().set(DEFAULT_BOOKINGS_KEY, "{not json").await.unwrap();

        assert!(store.load().await.is_empty());
        assert!(matches!(store.try_load().await, Err(DbError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_wrong_shape_loads_empty() {
        let (db, store) = store().await;
        db.kv()
            .set(DEFAULT_BOOKINGS_KEY, r#"[{"bookingNumber":"BK1","start":"soon"}]"#)
            .await
            .unwrap();

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_loads_browser_written_dates() {
        let (db, store) = store().await;
        let raw = r#"[{
            "bookingNumber": "BK45678901",
            "start": "2024-03-10T00:00:00.000Z",
            "end": "2024-03-12T00:00:00.000Z",
            "guestName": "Jung",
            "guestPhone": "010",
            "guestEmail": "",
            "specialRequests": ""
        }]"#;
        db.kv().set(DEFAULT_BOOKINGS_KEY, raw).await.unwrap();

        let bookings = store.load().await;
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].start, date("2024-03-10"));
        assert_eq!(bookings[0].end, date("2024-03-12"));
        assert_eq!(bookings[0].guest_email, None);
    }

    #[tokio::test]
    async fn test_keys_are_isolated() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let a = BookingStore::new(db.kv(), "a");
        let b = BookingStore::new(db.kv(), "b");

        a.append(&mut Vec::new(), booking("BK1", "2024-03-10", "2024-03-12")).await;

        assert_eq!(a.load().await.len(), 1);
        assert!(b.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_storage_is_not_fatal() {
        let (db, store) = store().await;
        db.close().await;

        store.save(&[booking("BK1", "2024-03-10", "2024-03-12")]).await;
        assert!(store.load().await.is_empty());
        assert!(store.try_save(&[]).await.is_err());
    }

    #[tokio::test]
    async fn test_append_keeps_known_bookings_when_storage_fails() {
        let (db, store) = store().await;
        store.save(&[booking("BK1", "2024-03-10", "2024-03-12")]).await;
        let mut known = store.load().await;
        db.close().await;

        store.append(&mut known, booking("BK2", "2024-03-20", "2024-03-21")).await;

        let numbers: Vec<&str> = known.iter().map(|b| b.booking_number.as_str()).collect();
        assert_eq!(numbers, vec!["BK1", "BK2"]);
    }
}
