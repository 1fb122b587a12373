//! Portfolio report
//!
//! Everything the dashboard, risk, and report screens show, gathered into
//! one serializable value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use domain_analytics::{DashboardSummary, PendingClaim, PolicyTypeClaims, ReportsGenerator, RiskAnalyzer};
use domain_claims::{Claim, HighRiskPolicyholder, RiskThresholds};
use domain_party::PolicyType;
use infra_store::ClaimsStore;

/// A snapshot of every figure derived from the ledger
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioReport<'a> {
    /// The store's "today"
    pub generated_on: NaiveDate,
    /// Thresholds used for `high_risk`
    pub thresholds: RiskThresholds,
    /// Last load or save failure, if one is outstanding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_warning: Option<String>,
    pub dashboard: DashboardSummary<'a>,
    pub high_risk: Vec<HighRiskPolicyholder<'a>>,
    pub claims_by_policy_type: BTreeMap<PolicyType, PolicyTypeClaims>,
    pub monthly_claims: BTreeMap<String, usize>,
    pub average_claim_by_policy_type: BTreeMap<PolicyType, Decimal>,
    pub highest_claim: Option<&'a Claim>,
    pub pending_claims: Vec<PendingClaim<'a>>,
}

impl<'a> PortfolioReport<'a> {
    pub fn build(store: &'a ClaimsStore) -> Self {
        let analyzer = RiskAnalyzer::new(store);
        let reports = ReportsGenerator::new(store);

        Self {
            generated_on: store.today(),
            thresholds: *store.thresholds(),
            persistence_warning: store.last_persistence_error().map(ToString::to_string),
            dashboard: DashboardSummary::build(store),
            high_risk: store.high_risk_policyholders(),
            claims_by_policy_type: analyzer.claims_by_policy_type(),
            monthly_claims: reports.monthly_claims(),
            average_claim_by_policy_type: reports.average_claim_by_policy_type(),
            highest_claim: reports.highest_claim(),
            pending_claims: reports.pending_claims(),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
