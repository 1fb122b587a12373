//! Portfolio Analytics
//!
//! Read-only figures derived from the ledger, computed over any
//! [`ClaimsView`](domain_claims::ClaimsView):
//!
//! - [`RiskAnalyzer`]: claim counts, amounts and outcomes per policy type
//! - [`ReportsGenerator`]: monthly volumes, averages, the largest claim, and
//!   the pending queue
//! - [`DashboardSummary`]: headline totals and a per-policyholder roster
//!
//! High-risk detection lives with the store, since it needs "today".
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_analytics::{ReportsGenerator, RiskAnalyzer};
//!
//! let by_type = RiskAnalyzer::new(&store).claims_by_policy_type();
//! let largest = ReportsGenerator::new(&store).highest_claim();
//! ```

pub mod risk;
pub mod reports;
pub mod dashboard;

pub use risk::{PolicyTypeClaims, RiskAnalyzer};
pub use reports::{PendingClaim, ReportsGenerator};
pub use dashboard::{DashboardSummary, RosterEntry, StatusCounts};

use domain_claims::{Claim, ClaimsView};
use domain_party::Policyholder;
use tracing::warn;

/// Every claim paired with its policyholder; unresolvable claims are logged
/// and skipped
pub(crate) fn resolved_claims<'a, V>(view: &'a V) -> impl Iterator<Item = (&'a Claim, &'a Policyholder)> + 'a
where
    V: ClaimsView + ?Sized,
{
    view.claims().filter_map(move |claim| {
        let holder = view.policyholder(&claim.policyholder_id);
        if holder.is_none() {
            warn!(
                claim_id = %claim.id,
                policyholder_id = %claim.policyholder_id,
                "Claim references unknown policyholder, skipped"
            );
        }
        holder.map(|holder| (claim, holder))
    })
}
