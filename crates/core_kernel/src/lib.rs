//! Core Kernel - Foundational types for the claims ledger
//!
//! This crate provides the building blocks shared by every other crate:
//! - Strongly-typed identifiers for policyholders and claims
//! - Calendar types: trailing date windows, clocks, and the configured timezone

pub mod identifiers;
pub mod temporal;
pub mod error;

pub use identifiers::{PolicyholderId, ClaimId};
pub use temporal::{Clock, SystemClock, ManualClock, TrailingWindow, Timezone};
pub use error::IdentifierError;
