//! Core error types used across the system

use thiserror::Error;

/// Raised when text cannot be parsed into a typed identifier
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Invalid {kind} identifier '{value}'")]
    Malformed {
        kind: &'static str,
        value: String,
    },
}

impl IdentifierError {
    pub fn malformed(kind: &'static str, value: impl Into<String>) -> Self {
        IdentifierError::Malformed {
            kind,
            value: value.into(),
        }
    }
}
