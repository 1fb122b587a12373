//! Claims domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    /// Claim amount is zero or negative
    #[error("Claim amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Status text names none of the known statuses
    #[error("Unrecognized claim status '{0}' (expected Pending, Approved or Rejected)")]
    UnrecognizedStatus(String),
}
