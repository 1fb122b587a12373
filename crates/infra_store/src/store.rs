//! The claims store
//!
//! [`ClaimsStore`] keeps policyholders and claims in ordered maps keyed by
//! id. Ids are time-ordered, so map order is creation order, and it stays
//! that way across a save and reload.
//!
//! Every successful mutation rewrites the snapshot through the configured
//! [`SnapshotPort`]. A failed write is logged and kept in
//! [`ClaimsStore::last_persistence_error`]; the mutation itself still
//! succeeds.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, error, info, instrument, warn};

use core_kernel::{ClaimId, Clock, PolicyholderId, SystemClock, TrailingWindow};
use domain_claims::{claim_frequency, Claim, ClaimStatus, ClaimsView, HighRiskPolicyholder, RiskThresholds};
use domain_party::{PolicyType, Policyholder};

use crate::adapters::JsonFileSnapshot;
use crate::config::StoreConfig;
use crate::error::{PersistenceError, StoreError};
use crate::port::SnapshotPort;
use crate::snapshot::{Snapshot, SnapshotDocument};

const POLICYHOLDER: &str = "Policyholder";
const CLAIM: &str = "Claim";

/// In-memory ledger of policyholders and claims, persisted as a snapshot
pub struct ClaimsStore {
    policyholders: BTreeMap<PolicyholderId, Policyholder>,
    claims: BTreeMap<ClaimId, Claim>,
    claims_by_policyholder: HashMap<PolicyholderId, BTreeSet<ClaimId>>,
    port: Box<dyn SnapshotPort>,
    clock: Box<dyn Clock>,
    thresholds: RiskThresholds,
    persistence_error: Option<PersistenceError>,
}

impl std::fmt::Debug for ClaimsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimsStore")
            .field("location", &self.port.location())
            .field("policyholders", &self.policyholders.len())
            .field("claims", &self.claims.len())
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}

impl ClaimsStore {
    /// Opens the JSON snapshot named in `config`, reading the wall clock in
    /// the configured timezone
    ///
    /// A missing file starts an empty store. An unreadable or invalid file
    /// also starts an empty store; the failure is logged and available from
    /// [`last_persistence_error`](Self::last_persistence_error).
    pub fn open(config: &StoreConfig) -> Self {
        Self::with_port(
            JsonFileSnapshot::new(config.data_file.clone()),
            SystemClock::new(config.timezone),
            config.risk,
        )
    }

    /// Builds a store over any snapshot port and clock, loading whatever the
    /// port holds
    pub fn with_port(
        port: impl SnapshotPort + 'static,
        clock: impl Clock + 'static,
        thresholds: RiskThresholds,
    ) -> Self {
        let mut store = Self {
            policyholders: BTreeMap::new(),
            claims: BTreeMap::new(),
            claims_by_policyholder: HashMap::new(),
            port: Box::new(port),
            clock: Box::new(clock),
            thresholds,
            persistence_error: None,
        };

        if let Err(e) = store.reload() {
            error!(location = %store.port.location(), error = %e, "Failed to load snapshot, starting empty");
            store.persistence_error = Some(e);
        }
        store
    }

    /// Replaces the in-memory state with the stored snapshot
    ///
    /// On failure the store is left empty.
    pub fn reload(&mut self) -> Result<(), PersistenceError> {
        self.install(Snapshot::default());

        let Some(document) = self.port.load()? else {
            info!(location = %self.port.location(), "No snapshot found, starting empty");
            return Ok(());
        };
        let snapshot = document.decode().map_err(|source| PersistenceError::InvalidRecord {
            location: self.port.location(),
            source,
        })?;
        self.install(snapshot);

        info!(
            location = %self.port.location(),
            policyholders = self.policyholders.len(),
            claims = self.claims.len(),
            "Snapshot loaded"
        );
        Ok(())
    }

    /// Writes the full state through the snapshot port
    pub fn save(&self) -> Result<(), PersistenceError> {
        let document = SnapshotDocument::capture(self.policyholders.values(), self.claims.values());
        self.port.save(&document)?;
        debug!(location = %self.port.location(), "Snapshot saved");
        Ok(())
    }

    fn persist(&mut self) {
        match self.save() {
            Ok(()) => self.persistence_error = None,
            Err(e) => {
                error!(location = %self.port.location(), error = %e, "Failed to save snapshot");
                self.persistence_error = Some(e);
            }
        }
    }

    fn install(&mut self, snapshot: Snapshot) {
        let mut index: HashMap<PolicyholderId, BTreeSet<ClaimId>> = HashMap::new();
        for claim in snapshot.claims.values() {
            index.entry(claim.policyholder_id).or_default().insert(claim.id);
        }
        self.policyholders = snapshot.policyholders;
        self.claims = snapshot.claims;
        self.claims_by_policyholder = index;
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Registers a policyholder and returns the new id
    #[instrument(skip_all)]
    pub fn add_policyholder(
        &mut self,
        name: impl Into<String>,
        age: u32,
        policy_type: impl Into<PolicyType>,
        sum_insured: Decimal,
    ) -> Result<PolicyholderId, StoreError> {
        let holder = Policyholder::register(name, age, policy_type, sum_insured).map_err(|e| {
            warn!(error = %e, "Rejected policyholder");
            StoreError::from(e)
        })?;
        let id = holder.id;

        info!(policyholder_id = %id, policy_type = %holder.policy_type, "Policyholder added");
        self.policyholders.insert(id, holder);
        self.persist();
        Ok(id)
    }

    /// Files a pending claim dated today and returns the new id
    pub fn add_claim(
        &mut self,
        policyholder_id: &PolicyholderId,
        claim_amount: Decimal,
        reason: impl Into<String>,
    ) -> Result<ClaimId, StoreError> {
        self.add_claim_with_status(policyholder_id, claim_amount, reason, ClaimStatus::Pending)
    }

    /// Files a claim dated today with an explicit starting status
    ///
    /// An unknown policyholder is reported before the amount is checked.
    #[instrument(skip(self, policyholder_id, claim_amount, reason), fields(policyholder_id = %policyholder_id))]
    pub fn add_claim_with_status(
        &mut self,
        policyholder_id: &PolicyholderId,
        claim_amount: Decimal,
        reason: impl Into<String>,
        status: ClaimStatus,
    ) -> Result<ClaimId, StoreError> {
        if !self.policyholders.contains_key(policyholder_id) {
            warn!("Claim filed against unknown policyholder");
            return Err(StoreError::not_found(POLICYHOLDER, policyholder_id));
        }

        let claim = Claim::file(*policyholder_id, claim_amount, reason, status, self.clock.today())
            .map_err(|e| {
                warn!(error = %e, "Rejected claim");
                StoreError::from(e)
            })?;
        let id = claim.id;

        info!(claim_id = %id, amount = %claim.claim_amount, status = %claim.status, "Claim added");
        self.claims_by_policyholder
            .entry(claim.policyholder_id)
            .or_default()
            .insert(id);
        self.claims.insert(id, claim);
        self.persist();
        Ok(id)
    }

    /// Overwrites a claim's status; every other field is left alone
    #[instrument(skip(self, claim_id), fields(claim_id = %claim_id))]
    pub fn update_claim_status(&mut self, claim_id: &ClaimId, status: ClaimStatus) -> Result<(), StoreError> {
        let claim = self
            .claims
            .get_mut(claim_id)
            .ok_or_else(|| StoreError::not_found(CLAIM, claim_id))?;

        let previous = claim.status;
        claim.set_status(status);
        info!(from = %previous, to = %status, "Claim status updated");
        self.persist();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn policyholder(&self, id: &PolicyholderId) -> Option<&Policyholder> {
        self.policyholders.get(id)
    }

    pub fn claim(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.get(id)
    }

    /// Every policyholder, in creation order
    pub fn policyholders(&self) -> impl Iterator<Item = &Policyholder> + '_ {
        self.policyholders.values()
    }

    /// Every claim, in creation order
    pub fn claims(&self) -> impl Iterator<Item = &Claim> + '_ {
        self.claims.values()
    }

    pub fn policyholder_count(&self) -> usize {
        self.policyholders.len()
    }

    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    /// Claims filed against one policyholder, in creation order
    ///
    /// Empty for an unknown policyholder.
    pub fn claims_for(&self, policyholder_id: &PolicyholderId) -> Vec<&Claim> {
        self.claims_by_policyholder
            .get(policyholder_id)
            .map(|ids| ids.iter().filter_map(|id| self.claims.get(id)).collect())
            .unwrap_or_default()
    }

    /// Claims filed against one policyholder in the last `window_days` days,
    /// counting today and the boundary day
    pub fn claim_frequency(&self, policyholder_id: &PolicyholderId, window_days: u32) -> usize {
        let window = TrailingWindow::ending_on(self.today(), window_days);
        claim_frequency(self.claims_for(policyholder_id), window)
    }

    /// Policyholders over the frequency or ratio threshold, in creation order
    pub fn high_risk_policyholders(&self) -> Vec<HighRiskPolicyholder<'_>> {
        let today = self.today();
        self.policyholders
            .values()
            .filter_map(|holder| {
                let profile = self.thresholds.assess(holder, self.claims_for(&holder.id), today);
                profile.is_high_risk().then_some(HighRiskPolicyholder {
                    policyholder: holder,
                    profile,
                })
            })
            .collect()
    }

    /// Today's date according to the store's clock
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Where the snapshot lives
    pub fn location(&self) -> String {
        self.port.location()
    }

    /// The most recent load or save failure, cleared by the next successful save
    pub fn last_persistence_error(&self) -> Option<&PersistenceError> {
        self.persistence_error.as_ref()
    }

    pub fn take_persistence_error(&mut self) -> Option<PersistenceError> {
        self.persistence_error.take()
    }
}

impl ClaimsView for ClaimsStore {
    fn policyholder(&self, id: &PolicyholderId) -> Option<&Policyholder> {
        self.policyholders.get(id)
    }

    fn policyholders(&self) -> Box<dyn Iterator<Item = &Policyholder> + '_> {
        Box::new(self.policyholders.values())
    }

    fn claims(&self) -> Box<dyn Iterator<Item = &Claim> + '_> {
        Box::new(self.claims.values())
    }

    fn claims_for(&self, id: &PolicyholderId) -> Vec<&Claim> {
        ClaimsStore::claims_for(self, id)
    }
}
