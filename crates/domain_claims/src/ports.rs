//! Read-only port over the ledger
//!
//! Analytics and reporting code depends on this trait rather than on the
//! storage crate, so any holder of policyholders and claims can be analysed.
//!
//! ```rust,ignore
//! fn total_claimed(view: &impl ClaimsView) -> Decimal {
//!     view.claims().map(|claim| claim.claim_amount).sum()
//! }
//! ```

use core_kernel::PolicyholderId;
use domain_party::Policyholder;

use crate::claim::Claim;

/// Read access to policyholders and their claims
pub trait ClaimsView {
    /// Looks up one policyholder
    fn policyholder(&self, id: &PolicyholderId) -> Option<&Policyholder>;

    /// Every policyholder, in creation order
    fn policyholders(&self) -> Box<dyn Iterator<Item = &Policyholder> + '_>;

    /// Every claim, in creation order
    fn claims(&self) -> Box<dyn Iterator<Item = &Claim> + '_>;

    /// Claims filed against one policyholder, in creation order
    fn claims_for(&self, id: &PolicyholderId) -> Vec<&Claim> {
        self.claims()
            .filter(|claim| claim.policyholder_id == *id)
            .collect()
    }

    /// Pairs each claim with the policyholder it was filed against
    ///
    /// Claims whose policyholder cannot be found are skipped.
    fn claims_with_policyholders(&self) -> Box<dyn Iterator<Item = (&Claim, &Policyholder)> + '_> {
        Box::new(
            self.claims()
                .filter_map(move |claim| self.policyholder(&claim.policyholder_id).map(|holder| (claim, holder))),
        )
    }
}
