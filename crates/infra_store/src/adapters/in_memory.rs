//! In-memory adapter

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::PersistenceError;
use crate::port::SnapshotPort;
use crate::snapshot::SnapshotDocument;

const LOCATION: &str = "memory";

#[derive(Debug, Default)]
struct Buffer {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

/// Holds the snapshot as JSON text in memory
///
/// Clones share one buffer, so a test can give one clone to a store and
/// inspect or tamper with the stored text through another. Contents go
/// through the same JSON encoding as the file adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshot {
    buffer: Arc<Mutex<Buffer>>,
}

impl InMemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `json` already stored
    pub fn with_contents(json: impl Into<String>) -> Self {
        let snapshot = Self::new();
        snapshot.buffer().contents = Some(json.into());
        snapshot
    }

    /// The stored JSON text, if anything has been stored
    pub fn contents(&self) -> Option<String> {
        self.buffer().contents.clone()
    }

    pub fn set_contents(&self, json: impl Into<String>) {
        self.buffer().contents = Some(json.into());
    }

    /// Makes subsequent saves fail until switched off again
    pub fn fail_writes(&self, fail: bool) {
        self.buffer().fail_writes = fail;
    }

    /// Number of successful saves
    pub fn write_count(&self) -> usize {
        self.buffer().writes
    }

    fn buffer(&self) -> MutexGuard<'_, Buffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotPort for InMemorySnapshot {
    fn location(&self) -> String {
        LOCATION.to_string()
    }

    fn load(&self) -> Result<Option<SnapshotDocument>, PersistenceError> {
        let Some(text) = self.contents() else {
            return Ok(None);
        };
        SnapshotDocument::from_json(&text)
            .map(Some)
            .map_err(|source| PersistenceError::Malformed {
                location: self.location(),
                source,
            })
    }

    fn save(&self, document: &SnapshotDocument) -> Result<(), PersistenceError> {
        let text = document.to_json().map_err(PersistenceError::Encode)?;
        let mut buffer = self.buffer();
        if buffer.fail_writes {
            return Err(PersistenceError::Write {
                location: self.location(),
                source: io::Error::other("writes are disabled"),
            });
        }
        buffer.contents = Some(text);
        buffer.writes += 1;
        Ok(())
    }
}
