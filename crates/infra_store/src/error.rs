//! Store error types
//!
//! Three kinds of failure reach callers of the store:
//! - [`StoreError::Validation`] for input that breaks a record rule
//! - [`StoreError::NotFound`] for references to ids the store does not hold
//! - [`PersistenceError`] for snapshot reads and writes

use std::fmt;
use thiserror::Error;

use domain_claims::ClaimError;
use domain_party::PartyError;

/// Errors returned by store mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Input broke a policyholder or claim rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record with the given id
    #[error("{entity} not found: {id}")]
    NotFound {
        entity: &'static str,
        id: String,
    },
}

impl StoreError {
    /// Creates a not found error for an entity type and identifier
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<PartyError> for StoreError {
    fn from(error: PartyError) -> Self {
        StoreError::Validation(error.to_string())
    }
}

impl From<ClaimError> for StoreError {
    fn from(error: ClaimError) -> Self {
        StoreError::Validation(error.to_string())
    }
}

/// A snapshot could not be read, written, or decoded
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The snapshot exists but could not be read
    #[error("Failed to read snapshot {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be written
    #[error("Failed to write snapshot {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not a JSON document of the expected shape
    #[error("Malformed snapshot {location}: {source}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// The ledger could not be serialized
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// A snapshot record failed validation
    #[error("Invalid snapshot {location}: {source}")]
    InvalidRecord {
        location: String,
        #[source]
        source: SnapshotError,
    },
}

/// A snapshot record that parsed as JSON but does not describe a valid entity
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// A required field is absent
    #[error("{entity} '{key}' is missing field '{field}'")]
    MissingField {
        entity: &'static str,
        key: String,
        field: &'static str,
    },

    /// A field is present but its value is rejected
    #[error("{entity} '{key}' has invalid {field}: {reason}")]
    InvalidField {
        entity: &'static str,
        key: String,
        field: &'static str,
        reason: String,
    },

    /// The record's own id disagrees with its map key
    #[error("{entity} stored under key '{key}' carries id '{id}'")]
    IdMismatch {
        entity: &'static str,
        key: String,
        id: String,
    },

    /// A claim points at a policyholder missing from the snapshot
    #[error("Claim '{key}' references unknown policyholder '{policyholder_id}'")]
    UnknownPolicyholder {
        key: String,
        policyholder_id: String,
    },
}
