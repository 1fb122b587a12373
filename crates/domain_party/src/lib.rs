//! Party Management Domain
//!
//! A policyholder is the insured party that claims are filed against. This
//! crate owns the policyholder record and the rules checked when one is
//! registered:
//!
//! - the name must not be blank
//! - the age must be positive
//! - the sum insured must be positive
//!
//! Policyholders are never edited after registration.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::{Policyholder, PolicyType};
//! use rust_decimal_macros::dec;
//!
//! let holder = Policyholder::register("Asha Rao", 41, PolicyType::health(), dec!(250000)).unwrap();
//! assert_eq!(holder.claim_ratio(dec!(50000)), dec!(0.2));
//! ```

pub mod policyholder;
pub mod error;

pub use policyholder::{Policyholder, PolicyType};
pub use error::PartyError;
