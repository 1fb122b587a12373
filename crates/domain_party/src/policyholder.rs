//! Policyholder record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::PolicyholderId;
use crate::error::PartyError;

/// Line of business a policyholder is covered under
///
/// The ledger ships with three standard types. Any other label is stored
/// as-is; restricting input to the standard set is left to whoever collects
/// it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyType(String);

impl PolicyType {
    pub const HEALTH: &'static str = "Health";
    pub const VEHICLE: &'static str = "Vehicle";
    pub const LIFE: &'static str = "Life";

    /// The labels offered for new policyholders
    pub const STANDARD: [&'static str; 3] = [Self::HEALTH, Self::VEHICLE, Self::LIFE];

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn health() -> Self {
        Self::new(Self::HEALTH)
    }

    pub fn vehicle() -> Self {
        Self::new(Self::VEHICLE)
    }

    pub fn life() -> Self {
        Self::new(Self::LIFE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for Health, Vehicle, and Life
    pub fn is_standard(&self) -> bool {
        Self::STANDARD.contains(&self.0.as_str())
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PolicyType {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for PolicyType {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// An insured party
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policyholder {
    /// Unique identifier, fixed at registration
    pub id: PolicyholderId,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Policy type
    pub policy_type: PolicyType,
    /// Sum insured
    pub sum_insured: Decimal,
}

impl Policyholder {
    /// Registers a new policyholder under a freshly generated id
    pub fn register(
        name: impl Into<String>,
        age: u32,
        policy_type: impl Into<PolicyType>,
        sum_insured: Decimal,
    ) -> Result<Self, PartyError> {
        Self::restore(PolicyholderId::generate(), name, age, policy_type, sum_insured)
    }

    /// Rebuilds a policyholder under a known id, applying the same rules as
    /// registration
    pub fn restore(
        id: PolicyholderId,
        name: impl Into<String>,
        age: u32,
        policy_type: impl Into<PolicyType>,
        sum_insured: Decimal,
    ) -> Result<Self, PartyError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PartyError::BlankName);
        }
        if age == 0 {
            return Err(PartyError::NonPositiveAge);
        }
        if sum_insured <= Decimal::ZERO {
            return Err(PartyError::NonPositiveSumInsured(sum_insured));
        }

        Ok(Self {
            id,
            name,
            age,
            policy_type: policy_type.into(),
            sum_insured,
        })
    }

    /// Total claimed divided by the sum insured
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn claim_ratio(&self, total_claimed: Decimal) -> Decimal {
        total_claimed
            .checked_div(self.sum_insured)
            .unwrap_or(Decimal::MAX)
    }
}
