//! Party domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a policyholder record breaks a registration rule
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    /// Name is empty or only whitespace
    #[error("Name cannot be empty")]
    BlankName,

    /// Age is zero
    #[error("Age must be positive")]
    NonPositiveAge,

    /// Sum insured is zero or negative
    #[error("Sum insured must be positive, got {0}")]
    NonPositiveSumInsured(Decimal),
}
