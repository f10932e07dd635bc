//! # Seed Data Generator
//!
//! Fills a development database with a few bookings so the calendar has
//! something to show.
//!
//! ## Usage
//! ```bash
//! # Seed ./lodge_dev.db with bookings around today
//! cargo run -p lodge-db --bin seed
//!
//! # Custom amount and path
//! cargo run -p lodge-db --bin seed -- --count 12 --db ./data/lodge.db
//! ```
//!
//! Bookings are spaced a week apart starting next week, each 1 to 3 nights.
//! Seeding is skipped when the key already holds bookings.

use chrono::{Duration, Local};
use clap::Parser;
use lodge_core::{Booking, BOOKING_NUMBER_PREFIX};
use lodge_db::{Database, DbConfig, DEFAULT_BOOKINGS_KEY};

/// Guest names for demo data
const GUESTS: &[(&str, &str)] = &[
    ("김민준", "010-1234-5678"),
    ("이서연", "010-2345-6789"),
    ("박지훈", "010-3456-7890"),
    ("최수아", "010-4567-8901"),
    ("정도윤", "010-5678-9012"),
    ("Alex Kim", "+82-10-6789-0123"),
];

/// Lodge Seed Data Generator
#[derive(Parser, Debug)]
#[command(name = "seed", about = "Writes demo bookings into a Lodge database")]
struct Args {
    /// Number of bookings to generate
    #[arg(short, long, default_value_t = 6)]
    count: usize,

    /// Database file path
    #[arg(short, long, default_value = "./lodge_dev.db")]
    db: String,

    /// Storage key holding the booking array
    #[arg(short, long, default_value = DEFAULT_BOOKINGS_KEY)]
    key: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args { count, db: db_path, key } = Args::parse();

    println!("🌱 Lodge Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!("Key:      {}", key);
    println!("Bookings: {}", count);
    println!();

    let config = DbConfig::new(&db_path).bookings_key(key);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let store = db.bookings();
    let existing = store.try_load().await?;
    if !existing.is_empty() {
        println!("⚠ Key already holds {} bookings", existing.len());
        println!("  Skipping seed to avoid overlaps.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let bookings: Vec<Booking> = (0..count).map(|i| generate_booking(today, i)).collect();

    store.try_save(&bookings).await?;

    println!();
    for booking in &bookings {
        println!(
            "  {}  {} → {}  ({} nights)  {}",
            booking.booking_number,
            booking.start,
            booking.end,
            booking.nights(),
            booking.guest_name
        );
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates the `index`-th demo booking relative to `today`.
fn generate_booking(today: chrono::NaiveDate, index: usize) -> Booking {
    let (name, phone) = GUESTS[index % GUESTS.len()];

    let start = today + Duration::days(7 * (index as i64 + 1));
    let end = start + Duration::days(1 + (index as i64 % 3));

    Booking {
        booking_number: format!("{}{:08}", BOOKING_NUMBER_PREFIX, 90_000_000 + index),
        start,
        end,
        guest_name: name.to_string(),
        guest_phone: phone.to_string(),
        guest_email: None,
        special_requests: (index % 2 == 0).then(|| "Late check-in".to_string()),
    }
}
