//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing records, denied capabilities). Infrastructure concerns belong
/// elsewhere. Every variant is recoverable: the shell reports it and returns
/// to the menu.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    /// A date could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidFormat(String),

    /// An expiry date lies strictly in the past.
    #[error("expiry date {0} is in the past")]
    PastDate(chrono::NaiveDate),

    /// A quantity/amount input was not numeric.
    #[error("not a number: '{0}'")]
    NotANumber(String),

    /// A quantity/amount was zero or negative.
    #[error("amount must be positive (got {0})")]
    NonPositive(f64),

    /// A unit was empty after trimming.
    #[error("unit cannot be empty")]
    EmptyUnit,

    /// An ingredient with this name is already in the store.
    #[error("ingredient '{0}' already exists")]
    AlreadyExists(String),

    /// The named ingredient is not in the store.
    #[error("ingredient '{0}' not found")]
    NotFound(String),

    /// A deduction larger than the current stock level.
    #[error("not enough in stock: requested {requested}, only {available} available")]
    InsufficientStock { requested: f64, available: f64 },

    /// The session's role does not hold the required capability.
    #[error("access denied: missing permission '{0}'")]
    PermissionDenied(String),

    /// A menu selection outside the offered choices.
    #[error("invalid choice: '{0}'")]
    InvalidMenuChoice(String),
}
