//! Claims Ledger - portfolio report
//!
//! Opens the configured snapshot and prints the full portfolio report as
//! pretty JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! CLAIMS_STORE__DATA_FILE=ledger.json claims-report > report.json
//! ```
//!
//! See [`interface_cli::config`] for every environment variable.

use anyhow::Context;
use infra_store::ClaimsStore;
use interface_cli::{init_tracing, AppConfig, PortfolioReport};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        data_file = %config.store.data_file.display(),
        timezone = %config.store.timezone,
        "Building portfolio report"
    );

    let store = ClaimsStore::open(&config.store);
    if let Some(e) = store.last_persistence_error() {
        tracing::warn!(error = %e, "Reporting on an empty ledger");
    }

    let report = PortfolioReport::build(&store);
    let json = report.to_json().context("Failed to encode report")?;
    println!("{}", json);

    Ok(())
}
