//! Claims Store
//!
//! This crate owns the ledger's state: every policyholder and every claim,
//! held in memory and written out as one JSON snapshot after each change.
//!
//! # Persistence
//!
//! The snapshot is read once when the store is opened and rewritten in full
//! after every mutation. Read and write failures are logged and kept on the
//! store for the caller to display; they never undo or fail the in-memory
//! change that triggered them.
//!
//! ```text
//! presentation ──mutations──▶ ClaimsStore ──save──▶ SnapshotPort ──▶ insurance_data.json
//!              ◀──queries───             ◀──load──
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{ClaimsStore, StoreConfig};
//!
//! let mut store = ClaimsStore::open(&StoreConfig::default());
//! let holder = store.add_policyholder("Asha Rao", 41, "Health", dec!(250000))?;
//! let claim = store.add_claim(&holder, dec!(1800), "Physiotherapy")?;
//! ```

pub mod config;
pub mod error;
pub mod snapshot;
pub mod port;
pub mod adapters;
pub mod store;

pub use config::StoreConfig;
pub use error::{PersistenceError, SnapshotError, StoreError};
pub use snapshot::{ClaimRecord, PolicyholderRecord, Snapshot, SnapshotDocument};
pub use port::SnapshotPort;
pub use adapters::{InMemorySnapshot, JsonFileSnapshot};
pub use store::ClaimsStore;
