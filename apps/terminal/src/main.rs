//! # Lodge Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lodge (terminal)                                 │
//! │                                                                         │
//! │  main.rs ────► parses flags                                             │
//! │  lib.rs ─────► logging, config, database, state                         │
//! │  repl.rs ────► prompt loop: pick, name, phone, submit, ...              │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  SQLite (lodge.db, kv_store table, "bookings" key)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;

use lodge_terminal_lib::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    lodge_terminal_lib::run(cli).await
}
