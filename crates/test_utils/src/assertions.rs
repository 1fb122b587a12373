//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use domain_claims::Claim;
use infra_store::ClaimsStore;

/// Asserts that two decimals differ by no more than `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that two claims agree on every field except status
pub fn assert_same_claim_except_status(actual: &Claim, expected: &Claim) {
    assert_eq!(actual.id, expected.id, "Claim id changed");
    assert_eq!(actual.policyholder_id, expected.policyholder_id, "Claim policyholder changed");
    assert_eq!(actual.claim_amount, expected.claim_amount, "Claim amount changed");
    assert_eq!(actual.reason, expected.reason, "Claim reason changed");
    assert_eq!(actual.date_of_claim, expected.date_of_claim, "Claim date changed");
}

/// Asserts that two stores hold the same policyholders and claims, in the
/// same order
pub fn assert_same_ledger(actual: &ClaimsStore, expected: &ClaimsStore) {
    let actual_holders: Vec<_> = actual.policyholders().collect();
    let expected_holders: Vec<_> = expected.policyholders().collect();
    assert_eq!(actual_holders, expected_holders, "Policyholders differ");

    let actual_claims: Vec<_> = actual.claims().collect();
    let expected_claims: Vec<_> = expected.claims().collect();
    assert_eq!(actual_claims, expected_claims, "Claims differ");
}
