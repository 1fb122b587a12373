//! High-risk policyholder rules
//!
//! A policyholder is high risk when either
//! - they filed more than `max_claims_in_window` claims inside the trailing
//!   frequency window, or
//! - everything they ever claimed, divided by their sum insured, exceeds
//!   `max_claim_ratio`.
//!
//! The frequency count is windowed; the claimed total is not.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use core_kernel::TrailingWindow;
use domain_party::Policyholder;
use crate::claim::Claim;

/// Days in the default claim frequency window
pub const DEFAULT_FREQUENCY_WINDOW_DAYS: u32 = 365;

/// Counts the claims filed inside `window`
pub fn claim_frequency<'a>(claims: impl IntoIterator<Item = &'a Claim>, window: TrailingWindow) -> usize {
    claims
        .into_iter()
        .filter(|claim| window.contains(claim.date_of_claim))
        .count()
}

/// Limits beyond which a policyholder is flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Claims allowed inside the window before flagging
    pub max_claims_in_window: usize,
    /// Claimed-to-insured ratio allowed before flagging
    pub max_claim_ratio: Decimal,
    /// Length of the trailing frequency window in days
    pub frequency_window_days: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            max_claims_in_window: 3,
            max_claim_ratio: dec!(0.8),
            frequency_window_days: DEFAULT_FREQUENCY_WINDOW_DAYS,
        }
    }
}

impl RiskThresholds {
    /// Profiles one policyholder against `claims`, which must be all of
    /// that policyholder's claims
    pub fn assess<'a>(
        &self,
        policyholder: &Policyholder,
        claims: impl IntoIterator<Item = &'a Claim>,
        today: NaiveDate,
    ) -> RiskProfile {
        let window = TrailingWindow::ending_on(today, self.frequency_window_days);

        let mut claim_frequency = 0;
        let mut total_claimed = Decimal::ZERO;
        for claim in claims {
            if window.contains(claim.date_of_claim) {
                claim_frequency += 1;
            }
            total_claimed = total_claimed.saturating_add(claim.claim_amount);
        }
        let claim_ratio = policyholder.claim_ratio(total_claimed);

        let mut risk_factors = Vec::new();
        if claim_frequency > self.max_claims_in_window {
            risk_factors.push(RiskFactor::HighFrequency { claims: claim_frequency });
        }
        if claim_ratio > self.max_claim_ratio {
            risk_factors.push(RiskFactor::HighClaimRatio { ratio: claim_ratio });
        }

        RiskProfile {
            claim_frequency,
            total_claimed,
            claim_ratio,
            risk_factors,
        }
    }
}

/// A threshold a policyholder has crossed
///
/// Serializes as its human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFactor {
    HighFrequency { claims: usize },
    HighClaimRatio { ratio: Decimal },
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFactor::HighFrequency { claims } => write!(f, "High frequency: {} claims", claims),
            RiskFactor::HighClaimRatio { ratio } => {
                write!(f, "High claim ratio: {:.2}%", ratio.saturating_mul(dec!(100)))
            }
        }
    }
}

impl Serialize for RiskFactor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Claim figures for one policyholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskProfile {
    /// Claims inside the frequency window
    pub claim_frequency: usize,
    /// Sum of every claim ever filed, capped at `Decimal::MAX`
    pub total_claimed: Decimal,
    /// `total_claimed / sum_insured`
    pub claim_ratio: Decimal,
    /// Crossed thresholds, frequency first
    pub risk_factors: Vec<RiskFactor>,
}

impl RiskProfile {
    pub fn is_high_risk(&self) -> bool {
        !self.risk_factors.is_empty()
    }
}

/// A flagged policyholder together with the figures that flagged them
#[derive(Debug, Clone, Serialize)]
pub struct HighRiskPolicyholder<'a> {
    pub policyholder: &'a Policyholder,
    #[serde(flatten)]
    pub profile: RiskProfile,
}
