//! JSON file adapter

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PersistenceError;
use crate::port::SnapshotPort;
use crate::snapshot::SnapshotDocument;

/// Stores the snapshot as a single pretty-printed JSON file
///
/// Every save rewrites the whole file in place.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotPort for JsonFileSnapshot {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Option<SnapshotDocument>, PersistenceError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No snapshot file yet");
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path).map_err(|source| PersistenceError::Read {
            location: self.location(),
            source,
        })?;

        SnapshotDocument::from_json(&text)
            .map(Some)
            .map_err(|source| PersistenceError::Malformed {
                location: self.location(),
                source,
            })
    }

    fn save(&self, document: &SnapshotDocument) -> Result<(), PersistenceError> {
        let text = document.to_json().map_err(PersistenceError::Encode)?;
        fs::write(&self.path, text).map_err(|source| PersistenceError::Write {
            location: self.location(),
            source,
        })
    }
}
