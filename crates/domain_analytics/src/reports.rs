//! Report figures
//!
//! Monthly volumes, per-type averages, the largest claim, and the queue of
//! claims still awaiting a decision.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use domain_claims::{Claim, ClaimsView};
use domain_party::{PolicyType, Policyholder};

use crate::resolved_claims;

/// A pending claim with the policyholder it was filed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingClaim<'a> {
    pub claim: &'a Claim,
    pub policyholder: &'a Policyholder,
}

/// Builds report figures from a ledger view
pub struct ReportsGenerator<'a, V: ClaimsView + ?Sized> {
    view: &'a V,
}

impl<'a, V: ClaimsView + ?Sized> ReportsGenerator<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self { view }
    }

    /// Number of claims filed in each `YYYY-MM` month
    pub fn monthly_claims(&self) -> BTreeMap<String, usize> {
        let mut months = BTreeMap::new();
        for claim in self.view.claims() {
            *months.entry(claim.filing_month()).or_insert(0) += 1;
        }
        months
    }

    /// Mean claimed amount for every policy type that has at least one claim
    pub fn average_claim_by_policy_type(&self) -> BTreeMap<PolicyType, Decimal> {
        let mut totals: BTreeMap<PolicyType, (Decimal, u32)> = BTreeMap::new();
        for (claim, holder) in resolved_claims(self.view) {
            let (sum, count) = totals.entry(holder.policy_type.clone()).or_default();
            *sum = sum.saturating_add(claim.claim_amount);
            *count += 1;
        }

        totals
            .into_iter()
            .map(|(policy_type, (sum, count))| (policy_type, sum / Decimal::from(count)))
            .collect()
    }

    /// The claim with the largest amount
    ///
    /// On a tie the earliest-created claim wins. `None` when there are no
    /// claims.
    pub fn highest_claim(&self) -> Option<&'a Claim> {
        self.view
            .claims()
            .reduce(|best, claim| if claim.claim_amount > best.claim_amount { claim } else { best })
    }

    /// Pending claims in creation order, each with its policyholder
    pub fn pending_claims(&self) -> Vec<PendingClaim<'a>> {
        resolved_claims(self.view)
            .filter(|(claim, _)| claim.is_pending())
            .map(|(claim, policyholder)| PendingClaim { claim, policyholder })
            .collect()
    }
}
