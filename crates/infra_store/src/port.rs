//! Snapshot persistence port
//!
//! The store reads and writes whole snapshots through this trait, so the
//! JSON file can be swapped for an in-memory buffer in tests or for any
//! other backing medium.

use crate::error::PersistenceError;
use crate::snapshot::SnapshotDocument;

/// Where snapshots are read from and written to
pub trait SnapshotPort {
    /// Human-readable location, used in logs and error messages
    fn location(&self) -> String;

    /// Reads the stored snapshot; `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<SnapshotDocument>, PersistenceError>;

    /// Replaces the stored snapshot
    fn save(&self, document: &SnapshotDocument) -> Result<(), PersistenceError>;
}
