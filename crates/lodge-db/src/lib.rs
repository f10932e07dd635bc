//! # lodge-db: Storage Layer for Lodge
//!
//! Persists the booking list in a local SQLite file through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lodge Data Flow                                  │
//! │                                                                         │
//! │  Terminal command (submit)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     lodge-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐    │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │    │   │
//! │  │   │   (pool.rs)   │◄───│ KvRepository  │    │  (embedded)  │    │   │
//! │  │   │  SqlitePool   │    │ BookingStore  │    │ 001_kv_store │    │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (kv_store: key → JSON text)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lodge_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("lodge.db")).await?;
//! let bookings = db.bookings().load().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::booking::{BookingStore, DEFAULT_BOOKINGS_KEY};
pub use repository::kv::KvRepository;
