//! # State Module
//!
//! Application state for the terminal app.
//!
//! The focused state types of the desktop layout are kept, but they live
//! together in one owned [`AppState`] that the prompt loop hands to each
//! command. Commands run one at a time, so nothing here is locked.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │                         AppState                                        │
//! │          ┌──────────────────┼──────────────────┐                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐           │
//! │  │   DbState    │  │  CalendarState   │  │   ConfigState    │           │
//! │  │              │  │                  │  │                  │           │
//! │  │  Database    │  │  displayed month │  │  property_name   │           │
//! │  │  (SQLite     │  │  selection       │  │  storage_key     │           │
//! │  │   pool)      │  │  form, bookings  │  │                  │           │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calendar;
mod config;
mod db;

pub use calendar::CalendarState;
pub use config::{ConfigState, ENV_PROPERTY_NAME, ENV_STORAGE_KEY};
pub use db::DbState;

use lodge_core::CalendarDate;
use tracing::info;

/// All state of a running session.
#[derive(Debug)]
pub struct AppState {
    pub db: DbState,
    pub config: ConfigState,
    pub calendar: CalendarState,
}

impl AppState {
    /// Builds the session, reading the current bookings from the store.
    pub async fn load(db: DbState, config: ConfigState, today: CalendarDate) -> Self {
        let bookings = db.bookings().load().await;
        info!(count = bookings.len(), %today, "Session state initialized");

        AppState {
            db,
            config,
            calendar: CalendarState::new(today, bookings),
        }
    }
}
