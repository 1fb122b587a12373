//! Tests for domain_claims

use chrono::{Days, NaiveDate};
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, PolicyholderId, TrailingWindow};
use domain_claims::{claim_frequency, Claim, ClaimError, ClaimStatus, RiskFactor, RiskThresholds};
use domain_party::{PolicyType, Policyholder};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn days_ago(days: u64) -> NaiveDate {
    today() - Days::new(days)
}

fn holder(sum_insured: rust_decimal::Decimal) -> Policyholder {
    Policyholder::register("Priya", 38, PolicyType::health(), sum_insured).unwrap()
}

fn claim_on(holder: &Policyholder, amount: rust_decimal::Decimal, filed_on: NaiveDate) -> Claim {
    Claim::file(holder.id, amount, "Hospital stay", ClaimStatus::Approved, filed_on).unwrap()
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[test]
    fn test_file_keeps_supplied_fields() {
        let policyholder_id = PolicyholderId::generate();
        let claim = Claim::file(policyholder_id, dec!(2500.75), "Windscreen", ClaimStatus::Pending, today()).unwrap();

        assert_eq!(claim.policyholder_id, policyholder_id);
        assert_eq!(claim.claim_amount, dec!(2500.75));
        assert_eq!(claim.reason, "Windscreen");
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.date_of_claim, today());
        assert!(claim.is_pending());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let result = Claim::file(PolicyholderId::generate(), dec!(0), "", ClaimStatus::Pending, today());
        assert_eq!(result.unwrap_err(), ClaimError::NonPositiveAmount(dec!(0)));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Claim::restore(
            ClaimId::generate(),
            PolicyholderId::generate(),
            dec!(-1),
            "",
            ClaimStatus::Pending,
            today(),
        );
        assert!(matches!(result, Err(ClaimError::NonPositiveAmount(_))));
    }

    #[test]
    fn test_set_status_changes_only_status() {
        let mut claim = Claim::file(PolicyholderId::generate(), dec!(90), "Glasses", ClaimStatus::Pending, today()).unwrap();
        let before = claim.clone();

        claim.set_status(ClaimStatus::Rejected);

        assert_eq!(claim.status, ClaimStatus::Rejected);
        assert_eq!(claim.id, before.id);
        assert_eq!(claim.claim_amount, before.claim_amount);
        assert_eq!(claim.reason, before.reason);
        assert_eq!(claim.date_of_claim, before.date_of_claim);
    }

    #[test]
    fn test_any_status_may_follow_any_other() {
        let mut claim = Claim::file(PolicyholderId::generate(), dec!(90), "", ClaimStatus::Rejected, today()).unwrap();
        claim.set_status(ClaimStatus::Pending);
        claim.set_status(ClaimStatus::Approved);
        assert_eq!(claim.status, ClaimStatus::Approved);
    }

    #[test]
    fn test_status_json_names() {
        assert_eq!(serde_json::to_string(&ClaimStatus::Approved).unwrap(), "\"Approved\"");
        let parsed: ClaimStatus = serde_json::from_str("\"Rejected\"").unwrap();
        assert_eq!(parsed, ClaimStatus::Rejected);
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(ClaimStatus::default(), ClaimStatus::Pending);
    }
}

// ============================================================================
// Frequency Tests
// ============================================================================

mod frequency_tests {
    use super::*;

    #[test]
    fn test_window_boundary() {
        let holder = holder(dec!(10000));
        let claims = vec![
            claim_on(&holder, dec!(10), days_ago(365)),
            claim_on(&holder, dec!(10), days_ago(366)),
            claim_on(&holder, dec!(10), today()),
        ];

        let window = TrailingWindow::ending_on(today(), 365);
        assert_eq!(claim_frequency(&claims, window), 2);
    }

    #[test]
    fn test_future_dated_claims_are_outside_window() {
        let holder = holder(dec!(10000));
        let claims = vec![claim_on(&holder, dec!(10), today() + Days::new(1))];

        let window = TrailingWindow::ending_on(today(), 365);
        assert_eq!(claim_frequency(&claims, window), 0);
    }
}

// ============================================================================
// Risk Assessment Tests
// ============================================================================

mod risk_tests {
    use super::*;

    #[test]
    fn test_four_recent_claims_flag_frequency_only() {
        let holder = holder(dec!(100000));
        let claims: Vec<Claim> = (0..4).map(|n| claim_on(&holder, dec!(100), days_ago(n * 30))).collect();

        let profile = RiskThresholds::default().assess(&holder, &claims, today());

        assert_eq!(profile.claim_frequency, 4);
        assert_eq!(profile.risk_factors, vec![RiskFactor::HighFrequency { claims: 4 }]);
        assert!(profile.risk_factors[0].to_string().contains("frequency"));
    }

    #[test]
    fn test_ratio_of_085_flags_ratio_only() {
        let holder = holder(dec!(10000));
        let claims = vec![claim_on(&holder, dec!(8500), days_ago(10))];

        let profile = RiskThresholds::default().assess(&holder, &claims, today());

        assert_eq!(profile.claim_ratio, dec!(0.85));
        assert_eq!(profile.risk_factors, vec![RiskFactor::HighClaimRatio { ratio: dec!(0.85) }]);
        assert_eq!(profile.risk_factors[0].to_string(), "High claim ratio: 85.00%");
    }

    #[test]
    fn test_low_frequency_and_ratio_not_flagged() {
        let holder = holder(dec!(10000));
        let claims = vec![
            claim_on(&holder, dec!(500), days_ago(5)),
            claim_on(&holder, dec!(500), days_ago(50)),
        ];

        let profile = RiskThresholds::default().assess(&holder, &claims, today());

        assert_eq!(profile.claim_frequency, 2);
        assert_eq!(profile.claim_ratio, dec!(0.1));
        assert!(!profile.is_high_risk());
    }

    #[test]
    fn test_three_claims_exceeding_sum_insured() {
        let holder = holder(dec!(10000));
        let claims = vec![
            claim_on(&holder, dec!(3000), days_ago(1)),
            claim_on(&holder, dec!(4000), days_ago(100)),
            claim_on(&holder, dec!(5000), days_ago(200)),
        ];

        let profile = RiskThresholds::default().assess(&holder, &claims, today());

        assert_eq!(profile.total_claimed, dec!(12000));
        assert_eq!(profile.claim_ratio, dec!(1.2));
        assert_eq!(profile.claim_frequency, 3);
        assert_eq!(profile.risk_factors, vec![RiskFactor::HighClaimRatio { ratio: dec!(1.2) }]);
    }

    #[test]
    fn test_total_includes_claims_outside_window() {
        let holder = holder(dec!(1000));
        let claims = vec![claim_on(&holder, dec!(900), days_ago(800))];

        let profile = RiskThresholds::default().assess(&holder, &claims, today());

        assert_eq!(profile.claim_frequency, 0);
        assert_eq!(profile.total_claimed, dec!(900));
        assert!(profile.is_high_risk());
    }

    #[test]
    fn test_both_factors_in_fixed_order() {
        let holder = holder(dec!(1000));
        let claims: Vec<Claim> = (0..5).map(|n| claim_on(&holder, dec!(200), days_ago(n))).collect();

        let profile = RiskThresholds::default().assess(&holder, &claims, today());

        assert_eq!(profile.risk_factors.len(), 2);
        assert!(matches!(profile.risk_factors[0], RiskFactor::HighFrequency { claims: 5 }));
        assert!(matches!(profile.risk_factors[1], RiskFactor::HighClaimRatio { .. }));
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let holder = holder(dec!(0.01));
        let huge = rust_decimal::Decimal::MAX / dec!(2) + dec!(10);
        let claims = vec![claim_on(&holder, huge, days_ago(1)), claim_on(&holder, huge, days_ago(2))];

        let profile = RiskThresholds::default().assess(&holder, &claims, today());

        assert_eq!(profile.total_claimed, rust_decimal::Decimal::MAX);
        assert_eq!(profile.claim_ratio, rust_decimal::Decimal::MAX);
        assert_eq!(profile.risk_factors.len(), 1);
        assert!(profile.risk_factors[0].to_string().starts_with("High claim ratio: "));
    }

    #[test]
    fn test_ratio_exactly_at_threshold_not_flagged() {
        let holder = holder(dec!(1000));
        let claims = vec![claim_on(&holder, dec!(800), days_ago(1))];

        let profile = RiskThresholds::default().assess(&holder, &claims, today());
        assert!(!profile.is_high_risk());
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = RiskThresholds {
            max_claims_in_window: 1,
            max_claim_ratio: dec!(5),
            frequency_window_days: 30,
        };
        let holder = holder(dec!(1000));
        let claims = vec![
            claim_on(&holder, dec!(10), days_ago(1)),
            claim_on(&holder, dec!(10), days_ago(20)),
            claim_on(&holder, dec!(10), days_ago(40)),
        ];

        let profile = thresholds.assess(&holder, &claims, today());

        assert_eq!(profile.claim_frequency, 2);
        assert_eq!(profile.risk_factors, vec![RiskFactor::HighFrequency { claims: 2 }]);
    }

    #[test]
    fn test_thresholds_deserialize_with_defaults() {
        let thresholds: RiskThresholds = serde_json::from_str(r#"{"max_claims_in_window": 5}"#).unwrap();
        assert_eq!(thresholds.max_claims_in_window, 5);
        assert_eq!(thresholds.max_claim_ratio, dec!(0.8));
        assert_eq!(thresholds.frequency_window_days, 365);
    }
}
