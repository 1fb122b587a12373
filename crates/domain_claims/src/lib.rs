//! Claims Management Domain
//!
//! A claim is filed against a policyholder with an amount and a reason, dated
//! on the day it is filed, and then moves between three statuses:
//!
//! ```text
//! Pending <-> Approved <-> Rejected
//! ```
//!
//! Any status may follow any other. The crate also holds the rules that flag
//! high-risk policyholders and the read-only port that analytics code uses to
//! walk the ledger.

pub mod claim;
pub mod risk;
pub mod ports;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use risk::{claim_frequency, HighRiskPolicyholder, RiskFactor, RiskProfile, RiskThresholds};
pub use ports::ClaimsView;
pub use error::ClaimError;
