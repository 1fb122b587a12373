//! Tests for the portfolio report

use rust_decimal_macros::dec;

use domain_claims::ClaimStatus;
use infra_store::{ClaimsStore, StoreConfig};
use interface_cli::PortfolioReport;
use test_utils::{PolicyholderFixtures, StoreHarness, TempDataFile};

#[test]
fn test_report_gathers_every_section() {
    let mut h = StoreHarness::new();
    let risky = h.register(PolicyholderFixtures::health());
    let calm = h.register(PolicyholderFixtures::life());
    for days in [10, 20, 30, 40] {
        h.claim_days_ago(&risky, dec!(100), ClaimStatus::Approved, days);
    }
    let big = h.claim_days_ago(&calm, dec!(2500), ClaimStatus::Pending, 5);

    let report = PortfolioReport::build(&h.store);

    assert_eq!(report.generated_on, h.store.today());
    assert!(report.persistence_warning.is_none());
    assert_eq!(report.dashboard.claim_count, 5);
    assert_eq!(report.high_risk.len(), 1);
    assert_eq!(report.high_risk[0].policyholder.id, risky);
    assert_eq!(report.claims_by_policy_type.len(), 2);
    assert_eq!(report.highest_claim.map(|c| c.id), Some(big));
    assert_eq!(report.pending_claims.len(), 1);
}

#[test]
fn test_report_json_shape() {
    let mut h = StoreHarness::new();
    let holder = h.register(PolicyholderFixtures::vehicle());
    h.claim_days_ago(&holder, dec!(24000), ClaimStatus::Approved, 3);

    let json = PortfolioReport::build(&h.store).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["dashboard"]["policyholder_count"], 1);
    assert_eq!(value["high_risk"][0]["policyholder"]["name"], "Daniel Okafor");
    assert_eq!(value["high_risk"][0]["risk_factors"][0], "High claim ratio: 96.00%");
    assert_eq!(value["claims_by_policy_type"]["Vehicle"]["approved"], 1);
    assert!(value["monthly_claims"].is_object());
    assert!(value.get("persistence_warning").is_none());
}

#[test]
fn test_empty_ledger_report() {
    let h = StoreHarness::new();
    let report = PortfolioReport::build(&h.store);

    assert!(report.highest_claim.is_none());
    assert!(report.high_risk.is_empty());
    assert!(report.to_json().is_ok());
}

#[test]
fn test_report_carries_load_failure() {
    let file = TempDataFile::with_contents("not json at all");
    let store = ClaimsStore::open(&StoreConfig::new(file.path()));

    let report = PortfolioReport::build(&store);
    assert!(report.persistence_warning.is_some());
    assert_eq!(report.dashboard.policyholder_count, 0);
}
