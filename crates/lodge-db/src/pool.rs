//! # Database Handle
//!
//! Opens the SQLite file that holds the booking list and hands out stores
//! over it.
//!
//! ```text
//! DbConfig::new(path) ──► Database::new ──► migrations ──► db.bookings()
//!                                                     └──► db.kv()
//! ```
//!
//! The file is opened in WAL mode, so the seed tool can read the key while
//! a prompt session is writing it.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::booking::{BookingStore, DEFAULT_BOOKINGS_KEY};
use crate::repository::kv::KvRepository;

/// Where and how to open the booking database.
///
/// ```rust,ignore
/// let config = DbConfig::new("./lodge.db").bookings_key("reservations");
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// SQLite file; created on first open.
    pub database_path: PathBuf,

    /// Pool size. One session only ever needs two.
    pub max_connections: u32,

    /// Apply the embedded migrations on open.
    pub run_migrations: bool,

    /// Key holding the booking array.
    pub bookings_key: String,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 2,
            run_migrations: true,
            bookings_key: DEFAULT_BOOKINGS_KEY.to_string(),
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    pub fn bookings_key(mut self, key: impl Into<String>) -> Self {
        self.bookings_key = key.into();
        self
    }

    /// A private database that lives as long as its pool. Used by tests.
    pub fn in_memory() -> Self {
        // Every connection to ":memory:" is a separate database.
        DbConfig::new(":memory:").max_connections(1)
    }
}

/// Open booking database.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    bookings_key: String,
}

impl Database {
    /// Opens (or creates) the database and applies migrations if asked to.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(path = %config.database_path.display(), "Opening booking database");

        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());
        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        debug!(max_connections = config.max_connections, "Pool ready");

        let db = Database {
            pool,
            bookings_key: config.bookings_key,
        };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Applies pending migrations and logs how many are in place.
    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await?;

        let (total, applied) = migrations::migration_status(&self.pool).await?;
        info!(total, applied, "Schema up to date");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Raw key-value access.
    pub fn kv(&self) -> KvRepository {
        KvRepository::new(self.pool.clone())
    }

    /// The booking list under the configured key.
    pub fn bookings(&self) -> BookingStore {
        BookingStore::new(self.kv(), self.bookings_key.clone())
    }

    /// Closes the pool. Store calls made afterwards fail (loads read empty).
    pub async fn close(&self) {
        info!("Closing booking database");
        self.pool.close().await;
    }
}
