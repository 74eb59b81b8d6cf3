//! crates/meal_planner_core/src/error.rs
//!
//! Defines the error type shared by the decoder and the planner.

use chrono::NaiveDate;

use crate::ports::PortError;

/// Every failure the core can report to its caller.
///
/// A recipe id that does not resolve while filling a plan slot is deliberately
/// absent from this list: the slot is cleared instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A stored field does not have the shape the dataset promises.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A decoded list was empty where a first element is required.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Two entries of one edit batch target the same date.
    #[error("Duplicate date found: {0}")]
    DuplicateKey(NaiveDate),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Represents an error that propagated up from one of the store ports.
    #[error("Store error: {0}")]
    Port(#[from] PortError),
}

/// A convenience type alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;
