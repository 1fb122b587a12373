//! Store Test Harness
//!
//! [`StoreHarness`] wraps a [`ClaimsStore`] over an [`InMemorySnapshot`]
//! with a [`ManualClock`] pinned to [`DateFixtures::today`]. Claims can be
//! filed on any date by moving the clock around the call.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{ClaimId, ManualClock, PolicyholderId};
use domain_claims::{ClaimStatus, RiskThresholds};
use infra_store::{ClaimsStore, InMemorySnapshot};

use crate::fixtures::{DateFixtures, PolicyholderInput};

/// A store with an inspectable snapshot and a controllable clock
pub struct StoreHarness {
    pub store: ClaimsStore,
    pub snapshot: InMemorySnapshot,
    pub clock: ManualClock,
}

impl Default for StoreHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreHarness {
    /// Empty store with default risk thresholds
    pub fn new() -> Self {
        Self::with_thresholds(RiskThresholds::default())
    }

    pub fn with_thresholds(thresholds: RiskThresholds) -> Self {
        let snapshot = InMemorySnapshot::new();
        let clock = ManualClock::new(DateFixtures::today());
        let store = ClaimsStore::with_port(snapshot.clone(), clock.clone(), thresholds);
        Self { store, snapshot, clock }
    }

    /// Opens a second store over the same snapshot and clock
    pub fn reopen(&self) -> ClaimsStore {
        ClaimsStore::with_port(self.snapshot.clone(), self.clock.clone(), *self.store.thresholds())
    }

    /// Registers a policyholder from fixture input
    pub fn register(&mut self, input: PolicyholderInput) -> PolicyholderId {
        self.store
            .add_policyholder(input.name, input.age, input.policy_type, input.sum_insured)
            .unwrap()
    }

    /// Registers a policyholder with just a policy type and sum insured
    pub fn policyholder(&mut self, policy_type: &str, sum_insured: Decimal) -> PolicyholderId {
        self.store
            .add_policyholder("Test Holder", 40, policy_type, sum_insured)
            .unwrap()
    }

    /// Files a pending claim dated today
    pub fn claim(&mut self, holder: &PolicyholderId, amount: Decimal) -> ClaimId {
        self.store.add_claim(holder, amount, "Test claim").unwrap()
    }

    /// Files a claim with the given status on the given date, then puts the
    /// clock back where it was
    pub fn claim_on(
        &mut self,
        holder: &PolicyholderId,
        amount: Decimal,
        status: ClaimStatus,
        filed_on: NaiveDate,
    ) -> ClaimId {
        let now = self.store.today();
        self.clock.set(filed_on);
        let id = self
            .store
            .add_claim_with_status(holder, amount, "Test claim", status)
            .unwrap();
        self.clock.set(now);
        id
    }

    /// Files a claim with the given status `days` days before today
    pub fn claim_days_ago(
        &mut self,
        holder: &PolicyholderId,
        amount: Decimal,
        status: ClaimStatus,
        days: u64,
    ) -> ClaimId {
        let filed_on = DateFixtures::days_ago(days);
        self.claim_on(holder, amount, status, filed_on)
    }
}
