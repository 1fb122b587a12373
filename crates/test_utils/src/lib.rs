//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Fixed dates and sample policyholders
//! - `harness`: A store over an in-memory snapshot with a pinned clock
//! - `temp_file`: Scratch snapshot paths in self-deleting temporary directories
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod harness;
pub mod temp_file;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use harness::*;
pub use temp_file::*;
pub use assertions::*;
pub use generators::*;
