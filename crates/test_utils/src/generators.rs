//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_claims::ClaimStatus;
use domain_party::PolicyType;

/// Strategy for non-blank policyholder names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}( [A-Z][a-z]{1,12})?"
}

/// Strategy for valid ages
pub fn age_strategy() -> impl Strategy<Value = u32> {
    1u32..=110
}

/// Strategy for the standard policy types
pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![
        Just(PolicyType::health()),
        Just(PolicyType::vehicle()),
        Just(PolicyType::life()),
    ]
}

/// Strategy for claim statuses
pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop::sample::select(ClaimStatus::ALL.to_vec())
}

/// Strategy for positive amounts with up to two decimal places
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for positive amounts with up to 18 significant digits and up
/// to 18 decimal places
pub fn precise_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=999_999_999_999_999_999i64, 0u32..=18).prop_map(|(digits, scale)| Decimal::new(digits, scale))
}

/// Strategy for dates within `span_days` either side of `center`
pub fn date_near_strategy(center: NaiveDate, span_days: u64) -> impl Strategy<Value = NaiveDate> {
    let span = span_days as i64;
    (-span..=span).prop_map(move |offset| {
        if offset < 0 {
            center - Days::new(offset.unsigned_abs())
        } else {
            center + Days::new(offset as u64)
        }
    })
}
