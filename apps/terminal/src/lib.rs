//! # Lodge Terminal Library
//!
//! Core library for the Lodge booking calendar in a terminal.
//! Holds startup, state, commands and drawing; `main.rs` only parses flags.
//!
//! ## Module Organization
//! ```text
//! lodge_terminal_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (owned, passed to commands)
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── calendar.rs ◄─── Displayed month, selection, form, cache
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── calendar.rs ◄─── Navigation and day picking
//! │   ├── booking.rs  ◄─── Form, submit, stored bookings
//! │   └── config.rs   ◄─── Configuration
//! ├── view.rs         ◄─── Text drawing
//! ├── repl.rs         ◄─── Line parser and prompt loop
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod repl;
pub mod state;
pub mod view;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lodge_db::{Database, DbConfig};
use state::{AppState, ConfigState, DbState};

/// Environment variable overriding the database file.
pub const ENV_DB_PATH: &str = "LODGE_DB_PATH";

/// Command-line flags.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "lodge", version, about = "Book nights on a calendar")]
pub struct Cli {
    /// Database file (default: platform data directory)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Storage key holding the booking list
    #[arg(long, value_name = "KEY")]
    pub storage_key: Option<String>,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
}

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • defaults ◄ LODGE_* env ◄ flags                                    │
/// │                                                                         │
/// │  3. Open the Store ───────────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, pending migrations run                      │
/// │                                                                         │
/// │  4. Load Session State ───────────────────────────────────────────────► │
/// │     • bookings read once (empty on absent or corrupt data)              │
/// │                                                                         │
/// │  5. Prompt Loop ──────────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Lodge");

    let config = ConfigState::from_env().with_storage_key(cli.storage_key);
    let db_path = get_database_path(cli.db)?;
    info!(?db_path, storage_key = %config.storage_key, "Database path determined");

    let db = Database::new(DbConfig::new(&db_path).bookings_key(config.storage_key.clone()))
        .await
        .with_context(|| format!("opening {}", db_path.display()))?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let state = AppState::load(DbState::new(db.clone()), config, today).await;

    repl::run_repl(state).await.context("terminal input failed")?;

    db.close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=lodge=trace` - Show trace for lodge crates only
/// - Default: warnings, plus INFO for lodge crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,lodge=info,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the database file path.
///
/// ## Priority
/// 1. `--db` flag
/// 2. `LODGE_DB_PATH` environment variable
/// 3. Platform data directory:
///    - **macOS**: `~/Library/Application Support/com.lodge.booking/lodge.db`
///    - **Windows**: `%APPDATA%\lodge\booking\data\lodge.db`
///    - **Linux**: `~/.local/share/booking/lodge.db`
pub fn get_database_path(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    if let Ok(path) = std::env::var(ENV_DB_PATH) {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "lodge", "booking")
        .context("could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("creating {}", data_dir.display()))?;

    Ok(data_dir.join("lodge.db"))
}
