//! Snapshot file format
//!
//! A snapshot is one JSON object with two members, each mapping an id string
//! to a flat record:
//!
//! ```json
//! {
//!   "policyholders": { "<uuid>": { "id": "<uuid>", "name": "Ada", "age": 41,
//!                                  "policy_type": "Health", "sum_insured": 10000.0 } },
//!   "claims": { "<uuid>": { "id": "<uuid>", "policyholder_id": "<uuid>",
//!                           "claim_amount": 2500.0, "reason": "Surgery",
//!                           "status": "Pending", "date_of_claim": "2024-05-01" } }
//! }
//! ```
//!
//! Amounts are JSON numbers written with every digit of the `Decimal`, so
//! they read back exactly.
//!
//! Records are read into [`PolicyholderRecord`] / [`ClaimRecord`], whose
//! fields are all optional, and only then converted into domain types by
//! [`SnapshotDocument::decode`]. A missing or invalid field in any record
//! rejects the whole document with a [`SnapshotError`] naming the record
//! and the field.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{ClaimId, PolicyholderId};
use domain_claims::{Claim, ClaimStatus};
use domain_party::{PartyError, Policyholder};

use crate::error::SnapshotError;

const POLICYHOLDER: &str = "Policyholder";
const CLAIM: &str = "Claim";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A policyholder as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyholderRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub policy_type: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub sum_insured: Option<Decimal>,
}

impl From<&Policyholder> for PolicyholderRecord {
    fn from(holder: &Policyholder) -> Self {
        Self {
            id: Some(holder.id.to_key()),
            name: Some(holder.name.clone()),
            age: Some(i64::from(holder.age)),
            policy_type: Some(holder.policy_type.to_string()),
            sum_insured: Some(holder.sum_insured),
        }
    }
}

/// A claim as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub id: Option<String>,
    pub policyholder_id: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub claim_amount: Option<Decimal>,
    pub reason: Option<String>,
    pub status: Option<String>,
    pub date_of_claim: Option<String>,
}

impl From<&Claim> for ClaimRecord {
    fn from(claim: &Claim) -> Self {
        Self {
            id: Some(claim.id.to_key()),
            policyholder_id: Some(claim.policyholder_id.to_key()),
            claim_amount: Some(claim.claim_amount),
            reason: Some(claim.reason.clone()),
            status: Some(claim.status.to_string()),
            date_of_claim: Some(claim.date_of_claim.format(DATE_FORMAT).to_string()),
        }
    }
}

/// The on-disk document, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub policyholders: BTreeMap<String, PolicyholderRecord>,
    #[serde(default)]
    pub claims: BTreeMap<String, ClaimRecord>,
}

/// Decoded, validated ledger state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub policyholders: BTreeMap<PolicyholderId, Policyholder>,
    pub claims: BTreeMap<ClaimId, Claim>,
}

impl SnapshotDocument {
    /// Builds a document from the current ledger contents
    pub fn capture<'a>(
        policyholders: impl IntoIterator<Item = &'a Policyholder>,
        claims: impl IntoIterator<Item = &'a Claim>,
    ) -> Self {
        Self {
            policyholders: policyholders
                .into_iter()
                .map(|holder| (holder.id.to_key(), PolicyholderRecord::from(holder)))
                .collect(),
            claims: claims
                .into_iter()
                .map(|claim| (claim.id.to_key(), ClaimRecord::from(claim)))
                .collect(),
        }
    }

    /// Parses JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Renders pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validates every record and converts it into its domain type
    pub fn decode(self) -> Result<Snapshot, SnapshotError> {
        let mut policyholders = BTreeMap::new();
        for (key, record) in self.policyholders {
            let holder = decode_policyholder(&key, record)?;
            policyholders.insert(holder.id, holder);
        }

        let mut claims = BTreeMap::new();
        for (key, record) in self.claims {
            let claim = decode_claim(&key, record)?;
            if !policyholders.contains_key(&claim.policyholder_id) {
                return Err(SnapshotError::UnknownPolicyholder {
                    key,
                    policyholder_id: claim.policyholder_id.to_key(),
                });
            }
            claims.insert(claim.id, claim);
        }

        Ok(Snapshot {
            policyholders,
            claims,
        })
    }
}

fn require<T>(value: Option<T>, entity: &'static str, key: &str, field: &'static str) -> Result<T, SnapshotError> {
    value.ok_or_else(|| SnapshotError::MissingField {
        entity,
        key: key.to_string(),
        field,
    })
}

fn invalid(entity: &'static str, key: &str, field: &'static str, reason: impl ToString) -> SnapshotError {
    SnapshotError::InvalidField {
        entity,
        key: key.to_string(),
        field,
        reason: reason.to_string(),
    }
}

/// Parses the map key and checks the record's own id agrees with it
fn keyed_id<T>(entity: &'static str, key: &str, record_id: Option<String>) -> Result<T, SnapshotError>
where
    T: std::str::FromStr + PartialEq,
    T::Err: ToString,
{
    let id = key.parse::<T>().map_err(|e| invalid(entity, key, "id", e))?;
    let record_id = require(record_id, entity, key, "id")?;
    let parsed = record_id
        .parse::<T>()
        .map_err(|e| invalid(entity, key, "id", e))?;
    if parsed != id {
        return Err(SnapshotError::IdMismatch {
            entity,
            key: key.to_string(),
            id: record_id,
        });
    }
    Ok(id)
}

fn decode_policyholder(key: &str, record: PolicyholderRecord) -> Result<Policyholder, SnapshotError> {
    let id: PolicyholderId = keyed_id(POLICYHOLDER, key, record.id)?;
    let name = require(record.name, POLICYHOLDER, key, "name")?;
    let age = require(record.age, POLICYHOLDER, key, "age")?;
    let age = u32::try_from(age).map_err(|_| invalid(POLICYHOLDER, key, "age", format!("{} is out of range", age)))?;
    let policy_type = require(record.policy_type, POLICYHOLDER, key, "policy_type")?;
    let sum_insured = require(record.sum_insured, POLICYHOLDER, key, "sum_insured")?;

    Policyholder::restore(id, name, age, policy_type, sum_insured).map_err(|e| {
        let field = match &e {
            PartyError::BlankName => "name",
            PartyError::NonPositiveAge => "age",
            PartyError::NonPositiveSumInsured(_) => "sum_insured",
        };
        invalid(POLICYHOLDER, key, field, e)
    })
}

fn decode_claim(key: &str, record: ClaimRecord) -> Result<Claim, SnapshotError> {
    let id: ClaimId = keyed_id(CLAIM, key, record.id)?;
    let policyholder_id = require(record.policyholder_id, CLAIM, key, "policyholder_id")?
        .parse::<PolicyholderId>()
        .map_err(|e| invalid(CLAIM, key, "policyholder_id", e))?;
    let claim_amount = require(record.claim_amount, CLAIM, key, "claim_amount")?;
    let reason = require(record.reason, CLAIM, key, "reason")?;
    let status = require(record.status, CLAIM, key, "status")?
        .parse::<ClaimStatus>()
        .map_err(|e| invalid(CLAIM, key, "status", e))?;
    let date_text = require(record.date_of_claim, CLAIM, key, "date_of_claim")?;
    let date_of_claim = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
        .map_err(|e| invalid(CLAIM, key, "date_of_claim", e))?;

    Claim::restore(id, policyholder_id, claim_amount, reason, status, date_of_claim)
        .map_err(|e| invalid(CLAIM, key, "claim_amount", e))
}
