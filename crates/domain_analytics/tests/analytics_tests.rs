//! Tests for portfolio analytics over a live store

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_analytics::{DashboardSummary, ReportsGenerator, RiskAnalyzer, StatusCounts};
use domain_claims::ClaimStatus;
use domain_party::PolicyType;
use test_utils::{
    assert_decimal_approx_eq, policy_type_strategy, positive_amount_strategy, status_strategy, DateFixtures,
    PolicyholderFixtures, StoreHarness,
};

mod claims_by_policy_type {
    use super::*;

    #[test]
    fn test_groups_by_type_with_status_counts() {
        let mut h = StoreHarness::new();
        let health = h.register(PolicyholderFixtures::health());
        let vehicle = h.register(PolicyholderFixtures::vehicle());
        h.claim_days_ago(&health, dec!(100), ClaimStatus::Approved, 5);
        h.claim_days_ago(&health, dec!(300), ClaimStatus::Rejected, 6);
        h.claim_days_ago(&health, dec!(200), ClaimStatus::Pending, 7);
        h.claim_days_ago(&vehicle, dec!(1500), ClaimStatus::Approved, 8);

        let by_type = RiskAnalyzer::new(&h.store).claims_by_policy_type();

        assert_eq!(by_type.len(), 2);
        let health = &by_type[&PolicyType::health()];
        assert_eq!(health.count, 3);
        assert_eq!(health.total_amount, dec!(600));
        assert_eq!(
            health.statuses,
            StatusCounts {
                pending: 1,
                approved: 1,
                rejected: 1,
            }
        );
        let vehicle = &by_type[&PolicyType::vehicle()];
        assert_eq!(vehicle.count, 1);
        assert_eq!(vehicle.approval_rate(), dec!(100));
    }

    #[test]
    fn test_types_without_claims_are_absent() {
        let mut h = StoreHarness::new();
        h.register(PolicyholderFixtures::life());
        let health = h.register(PolicyholderFixtures::health());
        h.claim(&health, dec!(50));

        let by_type = RiskAnalyzer::new(&h.store).claims_by_policy_type();
        assert!(!by_type.contains_key(&PolicyType::life()));
    }

    #[test]
    fn test_average_and_approval_rate() {
        let mut h = StoreHarness::new();
        let holder = h.policyholder("Health", dec!(100000));
        h.claim_days_ago(&holder, dec!(100), ClaimStatus::Approved, 1);
        h.claim_days_ago(&holder, dec!(200), ClaimStatus::Approved, 1);
        h.claim_days_ago(&holder, dec!(400), ClaimStatus::Rejected, 1);

        let by_type = RiskAnalyzer::new(&h.store).claims_by_policy_type();
        let health = &by_type[&PolicyType::health()];
        assert_decimal_approx_eq(health.average_amount(), dec!(233.33), dec!(0.01));
        assert_decimal_approx_eq(health.approval_rate(), dec!(66.67), dec!(0.01));
    }

    #[test]
    fn test_empty_store() {
        let h = StoreHarness::new();
        assert!(RiskAnalyzer::new(&h.store).claims_by_policy_type().is_empty());
    }

    #[test]
    fn test_serializes_status_counts_inline() {
        let mut h = StoreHarness::new();
        let holder = h.policyholder("Life", dec!(100000));
        h.claim(&holder, dec!(75));

        let by_type = RiskAnalyzer::new(&h.store).claims_by_policy_type();
        let json = serde_json::to_value(&by_type).unwrap();
        assert_eq!(json["Life"]["count"], 1);
        assert_eq!(json["Life"]["pending"], 1);
        assert_eq!(json["Life"]["approved"], 0);
    }
}

mod reports {
    use super::*;

    #[test]
    fn test_monthly_claims() {
        let mut h = StoreHarness::new();
        let holder = h.policyholder("Vehicle", dec!(100000));
        h.claim_on(&holder, dec!(10), ClaimStatus::Pending, DateFixtures::ymd(2024, 3, 1));
        h.claim_on(&holder, dec!(10), ClaimStatus::Pending, DateFixtures::ymd(2024, 3, 31));
        h.claim_on(&holder, dec!(10), ClaimStatus::Approved, DateFixtures::ymd(2024, 5, 9));
        h.claim_on(&holder, dec!(10), ClaimStatus::Approved, DateFixtures::ymd(2023, 12, 25));

        let months = ReportsGenerator::new(&h.store).monthly_claims();

        let expected: Vec<(String, usize)> = vec![
            ("2023-12".to_string(), 1),
            ("2024-03".to_string(), 2),
            ("2024-05".to_string(), 1),
        ];
        assert_eq!(months.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_average_claim_by_policy_type() {
        let mut h = StoreHarness::new();
        let health = h.policyholder("Health", dec!(100000));
        let life = h.policyholder("Life", dec!(100000));
        h.claim(&health, dec!(100));
        h.claim(&health, dec!(300));
        h.claim(&life, dec!(1000));

        let averages = ReportsGenerator::new(&h.store).average_claim_by_policy_type();

        assert_eq!(averages.len(), 2);
        assert_eq!(averages[&PolicyType::health()], dec!(200));
        assert_eq!(averages[&PolicyType::life()], dec!(1000));
    }

    #[test]
    fn test_highest_claim() {
        let mut h = StoreHarness::new();
        let holder = h.policyholder("Health", dec!(100000));
        h.claim(&holder, dec!(100));
        let biggest = h.claim(&holder, dec!(500));
        h.claim(&holder, dec!(250));

        let highest = ReportsGenerator::new(&h.store).highest_claim().unwrap();
        assert_eq!(highest.id, biggest);
        assert_eq!(highest.claim_amount, dec!(500));
    }

    #[test]
    fn test_highest_claim_tie_goes_to_earliest() {
        let mut h = StoreHarness::new();
        let holder = h.policyholder("Health", dec!(100000));
        let first = h.claim(&holder, dec!(500));
        h.claim(&holder, dec!(500));

        assert_eq!(ReportsGenerator::new(&h.store).highest_claim().unwrap().id, first);
    }

    #[test]
    fn test_highest_claim_tie_survives_reload() {
        let mut h = StoreHarness::new();
        let holder = h.policyholder("Health", dec!(100000));
        let first = h.claim(&holder, dec!(500));
        h.claim(&holder, dec!(500));

        let reloaded = h.reopen();
        assert_eq!(ReportsGenerator::new(&reloaded).highest_claim().unwrap().id, first);
    }

    #[test]
    fn test_highest_claim_empty() {
        let h = StoreHarness::new();
        assert!(ReportsGenerator::new(&h.store).highest_claim().is_none());
    }

    #[test]
    fn test_pending_claims_paired_with_policyholder() {
        let mut h = StoreHarness::new();
        let a = h.register(PolicyholderFixtures::health());
        let b = h.register(PolicyholderFixtures::vehicle());
        let pending_a = h.claim(&a, dec!(100));
        let decided = h.claim(&a, dec!(200));
        let pending_b = h.claim(&b, dec!(300));
        h.store.update_claim_status(&decided, ClaimStatus::Rejected).unwrap();

        let pending = ReportsGenerator::new(&h.store).pending_claims();

        let pairs: Vec<_> = pending.iter().map(|p| (p.claim.id, p.policyholder.id)).collect();
        assert_eq!(pairs, vec![(pending_a, a), (pending_b, b)]);
        assert_eq!(pending[1].policyholder.name, "Daniel Okafor");
    }

    #[test]
    fn test_pending_claims_empty_when_all_decided() {
        let mut h = StoreHarness::new();
        let holder = h.policyholder("Health", dec!(100000));
        let id = h.claim(&holder, dec!(100));
        h.store.update_claim_status(&id, ClaimStatus::Approved).unwrap();

        assert!(ReportsGenerator::new(&h.store).pending_claims().is_empty());
    }
}

mod dashboard {
    use super::*;

    #[test]
    fn test_totals_and_roster() {
        let mut h = StoreHarness::new();
        let a = h.register(PolicyholderFixtures::health());
        let b = h.register(PolicyholderFixtures::life());
        h.claim_days_ago(&a, dec!(1200.50), ClaimStatus::Pending, 2);
        h.claim_days_ago(&a, dec!(800), ClaimStatus::Approved, 3);
        h.claim_days_ago(&a, dec!(99.50), ClaimStatus::Rejected, 4);

        let summary = DashboardSummary::build(&h.store);

        assert_eq!(summary.policyholder_count, 2);
        assert_eq!(summary.claim_count, 3);
        assert_eq!(summary.pending_count(), 1);
        assert_eq!(summary.total_claimed, dec!(2100));
        assert_eq!(summary.by_status.total(), 3);
        let roster: Vec<_> = summary
            .roster
            .iter()
            .map(|entry| (entry.policyholder.id, entry.claim_count))
            .collect();
        assert_eq!(roster, vec![(a, 3), (b, 0)]);
    }

    #[test]
    fn test_empty_store() {
        let h = StoreHarness::new();
        let summary = DashboardSummary::build(&h.store);

        assert_eq!(summary.claim_count, 0);
        assert_eq!(summary.total_claimed, Decimal::ZERO);
        assert!(summary.roster.is_empty());
    }
}

mod large_amounts {
    use super::*;

    fn huge() -> Decimal {
        Decimal::MAX / dec!(2) + dec!(10)
    }

    #[test]
    fn test_totals_saturate_at_max() {
        let mut h = StoreHarness::new();
        let holder = h.policyholder("Health", dec!(100000));
        h.claim(&holder, huge());
        h.claim(&holder, huge());

        let by_type = RiskAnalyzer::new(&h.store).claims_by_policy_type();
        assert_eq!(by_type[&PolicyType::health()].total_amount, Decimal::MAX);
        assert_eq!(DashboardSummary::build(&h.store).total_claimed, Decimal::MAX);

        let averages = ReportsGenerator::new(&h.store).average_claim_by_policy_type();
        assert_eq!(averages[&PolicyType::health()], Decimal::MAX / dec!(2));
    }

    #[test]
    fn test_high_risk_list_survives_huge_claims() {
        let mut h = StoreHarness::new();
        let holder = h.policyholder("Life", dec!(100000));
        h.claim(&holder, huge());
        h.claim(&holder, huge());

        let flagged = h.store.high_risk_policyholders();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].profile.total_claimed, Decimal::MAX);
    }
}

proptest! {
    #[test]
    fn prop_per_type_figures_add_up(
        claims in prop::collection::vec((policy_type_strategy(), positive_amount_strategy(), status_strategy()), 1..20),
    ) {
        let mut h = StoreHarness::new();
        for (policy_type, amount, status) in &claims {
            let holder = h.policyholder(policy_type.as_str(), dec!(1000000));
            h.claim_days_ago(&holder, *amount, *status, 0);
        }

        let by_type = RiskAnalyzer::new(&h.store).claims_by_policy_type();
        let summary = DashboardSummary::build(&h.store);

        let count: usize = by_type.values().map(|t| t.count).sum();
        let total: Decimal = by_type.values().map(|t| t.total_amount).sum();
        prop_assert_eq!(count, claims.len());
        prop_assert_eq!(total, summary.total_claimed);
        for figures in by_type.values() {
            prop_assert_eq!(figures.statuses.total(), figures.count);
        }
        let months: usize = ReportsGenerator::new(&h.store).monthly_claims().values().sum();
        prop_assert_eq!(months, claims.len());
    }
}
