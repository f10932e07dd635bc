//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Lodge                                  │
//! │                                                                         │
//! │  Prompt                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  > pick 2024-03-11                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Booked day? ───── CoreError::DateBooked ──────┐                 │  │
//! │  │         │                                      │                 │  │
//! │  │         ▼                                      ▼                 │  │
//! │  │  Missing name? ─── CoreError::Validation ──── ApiError ─────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │  ! 2024-03-11 is already booked                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every ApiError is a notice: the prompt prints it and keeps going.

use serde::Serialize;
use thiserror::Error;

use lodge_core::{CoreError, ValidationError};
use lodge_db::DbError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "DATE_BOOKED",
///   "message": "2024-03-11 is already booked"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message for the notice line
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required form field is missing or malformed
    ValidationError,

    /// The picked day is already booked
    DateBooked,

    /// The picked range spans a booked day
    RangeConflict,

    /// Submit without both dates
    IncompleteSelection,

    /// The day is in the past or outside the displayed month
    NotSelectable,

    /// The typed line is not a command
    InvalidCommand,

    /// Storage failed
    StorageError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an error for a day the calendar does not offer.
    pub fn not_selectable(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotSelectable, message)
    }

    /// Creates an error for an unparseable line.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts storage errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::StorageError, "Storage connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::StorageError, "Storage migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Storage query failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Storage operation failed")
            }
            DbError::Corrupt { key, reason } => {
                tracing::error!(key = %key, "Corrupt stored value: {}", reason);
                ApiError::new(
                    ErrorCode::StorageError,
                    format!("Stored data under '{}' is unreadable", key),
                )
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::StorageError, "Storage pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal storage error: {}", e);
                ApiError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::DateBooked { .. } => ApiError::new(ErrorCode::DateBooked, message),
            CoreError::RangeConflict { .. } => ApiError::new(ErrorCode::RangeConflict, message),
            CoreError::IncompleteSelection => {
                ApiError::new(ErrorCode::IncompleteSelection, message)
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}
