//! Claims Ledger - command-line surface
//!
//! Loads configuration from the environment, sets up logging, and turns a
//! [`ClaimsStore`](infra_store::ClaimsStore) into a [`PortfolioReport`]
//! ready to print.

pub mod config;
pub mod telemetry;
pub mod report;

pub use config::{AppConfig, LogFormat};
pub use report::PortfolioReport;
pub use telemetry::init_tracing;
