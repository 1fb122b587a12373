//! Claims by policy type

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

use domain_claims::{Claim, ClaimsView};
use domain_party::PolicyType;

use crate::dashboard::StatusCounts;
use crate::resolved_claims;

/// Claim figures for one policy type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PolicyTypeClaims {
    /// Number of claims
    pub count: usize,
    /// Sum of claimed amounts, capped at `Decimal::MAX`
    pub total_amount: Decimal,
    /// Claims per status
    #[serde(flatten)]
    pub statuses: StatusCounts,
}

impl PolicyTypeClaims {
    fn record(&mut self, claim: &Claim) {
        self.count += 1;
        self.total_amount = self.total_amount.saturating_add(claim.claim_amount);
        self.statuses.record(claim.status);
    }

    /// Mean claimed amount; zero when there are no claims
    pub fn average_amount(&self) -> Decimal {
        if self.count == 0 {
            return Decimal::ZERO;
        }
        self.total_amount / Decimal::from(self.count)
    }

    /// Approved claims as a percentage of all claims; zero when there are
    /// no claims
    pub fn approval_rate(&self) -> Decimal {
        if self.count == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.statuses.approved) * dec!(100) / Decimal::from(self.count)
    }
}

/// Breaks the ledger down by policy type
pub struct RiskAnalyzer<'a, V: ClaimsView + ?Sized> {
    view: &'a V,
}

impl<'a, V: ClaimsView + ?Sized> RiskAnalyzer<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self { view }
    }

    /// Claim count, total and status counts for every policy type that has
    /// at least one claim
    pub fn claims_by_policy_type(&self) -> BTreeMap<PolicyType, PolicyTypeClaims> {
        let mut by_type: BTreeMap<PolicyType, PolicyTypeClaims> = BTreeMap::new();
        for (claim, holder) in resolved_claims(self.view) {
            by_type
                .entry(holder.policy_type.clone())
                .or_default()
                .record(claim);
        }
        by_type
    }
}
