//! # Commands Module
//!
//! Every action the prompt can trigger.
//!
//! Commands take the state they need by reference and return either a
//! plain value or `Result<T, ApiError>`. They never print; drawing is the
//! job of [`crate::view`].
//!
//! ## Command Categories
//!
//! - [`calendar`] - Month navigation and day picking
//! - [`booking`] - Form fields, submit, stored bookings
//! - [`config`] - Resolved configuration

pub mod booking;
pub mod calendar;
pub mod config;
