//! # Repository Module
//!
//! Storage access for Lodge.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command layer                                                          │
//! │       │                                                                 │
//! │       │  db.bookings().append(&mut calendar.bookings, booking)          │
//! │       ▼                                                                 │
//! │  BookingStore  ── JSON array of bookings under one key                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  KvRepository  ── get / set / remove on the kv_store table              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`kv::KvRepository`] - Raw string values by key
//! - [`booking::BookingStore`] - The booking list

pub mod booking;
pub mod kv;
