//! Claim record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, PolicyholderId};
use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Awaiting a decision
    #[default]
    Pending,
    /// Accepted for payout
    Approved,
    /// Declined
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 3] = [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ClaimError::UnrecognizedStatus(s.to_string()))
    }
}

/// A claim against a policyholder's policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// The policyholder the claim was filed against
    pub policyholder_id: PolicyholderId,
    /// Amount claimed
    pub claim_amount: Decimal,
    /// Free-text reason
    pub reason: String,
    /// Status
    pub status: ClaimStatus,
    /// Day the claim was filed
    pub date_of_claim: NaiveDate,
}

impl Claim {
    /// Files a new claim under a freshly generated id
    pub fn file(
        policyholder_id: PolicyholderId,
        claim_amount: Decimal,
        reason: impl Into<String>,
        status: ClaimStatus,
        filed_on: NaiveDate,
    ) -> Result<Self, ClaimError> {
        Self::restore(ClaimId::generate(), policyholder_id, claim_amount, reason, status, filed_on)
    }

    /// Rebuilds a claim under a known id
    pub fn restore(
        id: ClaimId,
        policyholder_id: PolicyholderId,
        claim_amount: Decimal,
        reason: impl Into<String>,
        status: ClaimStatus,
        date_of_claim: NaiveDate,
    ) -> Result<Self, ClaimError> {
        if claim_amount <= Decimal::ZERO {
            return Err(ClaimError::NonPositiveAmount(claim_amount));
        }

        Ok(Self {
            id,
            policyholder_id,
            claim_amount,
            reason: reason.into(),
            status,
            date_of_claim,
        })
    }

    /// Overwrites the status; no other field changes
    pub fn set_status(&mut self, status: ClaimStatus) {
        self.status = status;
    }

    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }

    /// `YYYY-MM` of the filing date
    pub fn filing_month(&self) -> String {
        self.date_of_claim.format("%Y-%m").to_string()
    }
}
