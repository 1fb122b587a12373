//! Pre-built Test Fixtures
//!
//! Fixed dates and sample policyholder data. Everything here is
//! deterministic so tests can assert exact values.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// The date test clocks start on (15 June 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// `days` before [`today`](Self::today)
    pub fn days_ago(days: u64) -> NaiveDate {
        Self::today().checked_sub_days(Days::new(days)).unwrap()
    }

    /// `days` after [`today`](Self::today)
    pub fn days_ahead(days: u64) -> NaiveDate {
        Self::today().checked_add_days(Days::new(days)).unwrap()
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Input for registering a policyholder
#[derive(Debug, Clone)]
pub struct PolicyholderInput {
    pub name: &'static str,
    pub age: u32,
    pub policy_type: &'static str,
    pub sum_insured: Decimal,
}

/// Fixture for policyholder data
pub struct PolicyholderFixtures;

impl PolicyholderFixtures {
    /// Health cover, 10 000 insured
    pub fn health() -> PolicyholderInput {
        PolicyholderInput {
            name: "Priya Sharma",
            age: 34,
            policy_type: "Health",
            sum_insured: dec!(10000),
        }
    }

    /// Vehicle cover, 25 000 insured
    pub fn vehicle() -> PolicyholderInput {
        PolicyholderInput {
            name: "Daniel Okafor",
            age: 47,
            policy_type: "Vehicle",
            sum_insured: dec!(25000),
        }
    }

    /// Life cover, 500 000 insured
    pub fn life() -> PolicyholderInput {
        PolicyholderInput {
            name: "Elena Petrova",
            age: 58,
            policy_type: "Life",
            sum_insured: dec!(500000),
        }
    }
}
