//! Scratch snapshot files
//!
//! Each [`TempDataFile`] owns a fresh temporary directory and names a
//! snapshot path inside it. The directory and everything in it are removed
//! when the guard is dropped.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FILE_NAME: &str = "claims.json";

/// A snapshot path in its own temporary directory
#[derive(Debug)]
pub struct TempDataFile {
    dir: TempDir,
    path: PathBuf,
}

impl TempDataFile {
    /// A path that does not exist yet
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("claims-ledger-")
            .tempdir()
            .unwrap();
        let path = dir.path().join(FILE_NAME);
        Self { dir, path }
    }

    /// Creates the file with `contents` already written
    pub fn with_contents(contents: &str) -> Self {
        let file = Self::new();
        fs::write(&file.path, contents).unwrap();
        file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory holding the file
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }
}

impl Default for TempDataFile {
    fn default() -> Self {
        Self::new()
    }
}
