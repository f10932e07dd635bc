//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! The `Database` from `lodge-db` holds a `SqlitePool`, so the wrapper is
//! cheap to share and needs no locking.

use lodge_db::{BookingStore, Database};

/// Wrapper around `Database` for the application state.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Shortcut for `inner().bookings()`.
    pub fn bookings(&self) -> BookingStore {
        self.db.bookings()
    }
}
