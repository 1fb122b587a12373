//! Dashboard figures

use rust_decimal::Decimal;
use serde::Serialize;

use domain_claims::{ClaimStatus, ClaimsView};
use domain_party::Policyholder;

/// Number of claims in each status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: ClaimStatus) {
        match status {
            ClaimStatus::Pending => self.pending += 1,
            ClaimStatus::Approved => self.approved += 1,
            ClaimStatus::Rejected => self.rejected += 1,
        }
    }

    pub fn get(&self, status: ClaimStatus) -> usize {
        match status {
            ClaimStatus::Pending => self.pending,
            ClaimStatus::Approved => self.approved,
            ClaimStatus::Rejected => self.rejected,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }
}

/// A policyholder and how many claims they have filed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterEntry<'a> {
    pub policyholder: &'a Policyholder,
    pub claim_count: usize,
}

/// Headline figures for the whole ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary<'a> {
    pub policyholder_count: usize,
    pub claim_count: usize,
    pub total_claimed: Decimal,
    pub by_status: StatusCounts,
    /// Every policyholder in creation order
    pub roster: Vec<RosterEntry<'a>>,
}

impl<'a> DashboardSummary<'a> {
    pub fn build<V: ClaimsView + ?Sized>(view: &'a V) -> Self {
        let mut claim_count = 0;
        let mut total_claimed = Decimal::ZERO;
        let mut by_status = StatusCounts::default();
        for claim in view.claims() {
            claim_count += 1;
            total_claimed = total_claimed.saturating_add(claim.claim_amount);
            by_status.record(claim.status);
        }

        let roster: Vec<RosterEntry<'a>> = view
            .policyholders()
            .map(|policyholder| RosterEntry {
                policyholder,
                claim_count: view.claims_for(&policyholder.id).len(),
            })
            .collect();

        Self {
            policyholder_count: roster.len(),
            claim_count,
            total_claimed,
            by_status,
            roster,
        }
    }

    /// Claims still awaiting a decision
    pub fn pending_count(&self) -> usize {
        self.by_status.pending
    }
}
