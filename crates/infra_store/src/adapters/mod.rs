//! Snapshot adapters
//!
//! - [`JsonFileSnapshot`]: a JSON file on the local filesystem
//! - [`InMemorySnapshot`]: a shared in-process buffer, for tests and tooling

mod json_file;
mod in_memory;

pub use json_file::JsonFileSnapshot;
pub use in_memory::InMemorySnapshot;
