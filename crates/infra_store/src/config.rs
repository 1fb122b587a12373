//! Store configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use core_kernel::Timezone;
use domain_claims::RiskThresholds;

/// Default snapshot file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "insurance_data.json";

/// Settings for opening a [`ClaimsStore`](crate::ClaimsStore)
///
/// # Example
///
/// ```rust
/// use infra_store::StoreConfig;
///
/// let config = StoreConfig::new("/var/lib/claims/ledger.json")
///     .timezone("Asia/Kolkata".parse().unwrap());
/// assert_eq!(config.timezone.name(), "Asia/Kolkata");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Snapshot file location
    pub data_file: PathBuf,
    /// Timezone that decides the filing date of new claims
    pub timezone: Timezone,
    /// High-risk thresholds
    pub risk: RiskThresholds,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl StoreConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            timezone: Timezone::default(),
            risk: RiskThresholds::default(),
        }
    }

    pub fn timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn risk(mut self, risk: RiskThresholds) -> Self {
        self.risk = risk;
        self
    }
}
