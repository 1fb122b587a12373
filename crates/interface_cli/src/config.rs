//! Application configuration
//!
//! Read from environment variables prefixed with `CLAIMS_`, using `__` to
//! reach nested settings:
//!
//! | Variable                                   | Default               |
//! |--------------------------------------------|-----------------------|
//! | `CLAIMS_STORE__DATA_FILE`                  | `insurance_data.json` |
//! | `CLAIMS_STORE__TIMEZONE`                   | `UTC`                 |
//! | `CLAIMS_STORE__RISK__MAX_CLAIMS_IN_WINDOW` | `3`                   |
//! | `CLAIMS_STORE__RISK__MAX_CLAIM_RATIO`      | `0.8`                 |
//! | `CLAIMS_STORE__RISK__FREQUENCY_WINDOW_DAYS`| `365`                 |
//! | `CLAIMS_LOG_LEVEL`                         | `info`                |
//! | `CLAIMS_LOG_FORMAT`                        | `pretty`              |

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use infra_store::StoreConfig;

/// Log output style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Store settings
    pub store: StoreConfig,
    /// Log level filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Log output style
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Self::environment())
    }

    /// Loads configuration from an environment source
    ///
    /// Tests pass an [`Environment`] with an explicit variable map.
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// The `CLAIMS_` environment source
    pub fn environment() -> Environment {
        Environment::with_prefix("CLAIMS")
            .prefix_separator("_")
            .separator("__")
    }
}
