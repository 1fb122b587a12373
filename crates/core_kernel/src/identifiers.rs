//! Strongly-typed identifiers for ledger entities
//!
//! Policyholder and claim ids are newtypes around UUIDs so that one can never
//! be passed where the other is expected. Ids are generated as UUIDv7, which
//! sort by creation time; ordered maps keyed by these ids therefore iterate in
//! creation order.
//!
//! On disk an id is the bare UUID string. For display it carries a short
//! prefix (`PH-...`, `CLM-...`), and parsing accepts either form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::IdentifierError;

macro_rules! define_id {
    ($name:ident, $prefix:literal, $kind:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh, time-ordered identifier
            pub fn generate() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// The bare UUID form used as the snapshot key
            pub fn to_key(&self) -> String {
                self.0.hyphenated().to_string()
            }

            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let uuid_str = trimmed
                    .strip_prefix(concat!($prefix, "-"))
                    .unwrap_or(trimmed);
                Uuid::parse_str(uuid_str)
                    .map(Self)
                    .map_err(|_| IdentifierError::malformed($kind, s))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(PolicyholderId, "PH", "policyholder");
define_id!(ClaimId, "CLM", "claim");
