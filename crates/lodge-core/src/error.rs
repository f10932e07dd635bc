//! # Error Types
//!
//! Domain-specific error types for lodge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lodge-core errors (this file)                                          │
//! │  ├── CoreError        - Selection conflicts, incomplete ranges          │
//! │  └── ValidationError  - Form input failures                             │
//! │                                                                         │
//! │  lodge-db errors (separate crate)                                       │
//! │  └── DbError          - Storage failures (never shown as blocking)      │
//! │                                                                         │
//! │  Terminal errors (in app)                                               │
//! │  └── ApiError         - The notice the visitor sees                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Notice                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. Every variant maps to a notice and the visitor
//! can keep going.

use thiserror::Error;

use crate::types::CalendarDate;

// =============================================================================
// Core Error
// =============================================================================

/// Booking logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The picked day is inside an existing booking.
    ///
    /// ## When This Occurs
    /// - Picking any day from a booking's check-in through its check-out
    ///   (the check-out day itself is blocked too)
    ///
    /// The selection is left exactly as it was.
    #[error("{date} is already booked")]
    DateBooked { date: CalendarDate },

    /// The picked range covers at least one booked day.
    ///
    /// ## User Workflow
    /// ```text
    /// Pick 03-05 (free)
    ///      │
    ///      ▼
    /// Pick 03-15 (free)
    ///      │
    ///      ▼
    /// Scan 03-05..=03-15: 03-10 is booked
    ///      │
    ///      ▼
    /// RangeConflict { start: 03-05, end: 03-15, booked: 03-10 }
    ///      │
    ///      ▼
    /// Selection reset to Empty
    /// ```
    #[error("The range {start} to {end} includes booked date {booked}")]
    RangeConflict {
        start: CalendarDate,
        end: CalendarDate,
        booked: CalendarDate,
    },

    /// Submit was attempted without both a check-in and a check-out date.
    #[error("Select both a check-in and a check-out date")]
    IncompleteSelection,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., an unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_error_messages() {
        let err = CoreError::DateBooked {
            date: date("2024-03-11"),
        };
        assert_eq!(err.to_string(), "2024-03-11 is already booked");

        let err = CoreError::RangeConflict {
            start: date("2024-03-05"),
            end: date("2024-03-15"),
            booked: date("2024-03-10"),
        };
        assert_eq!(
            err.to_string(),
            "The range 2024-03-05 to 2024-03-15 includes booked date 2024-03-10"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("guestName");
        assert_eq!(err.to_string(), "guestName is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("guestPhone").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
