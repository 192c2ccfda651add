//! Newtype wrappers for all domain entity identifiers.
//!
//! Identifiers are positive integers assigned by the store from a
//! process-lifetime counter (monotonically increasing, never reused).
//! Using distinct types prevents accidentally passing a `CajaId` where an
//! `ExpedienteId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `u32`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create an identifier from a raw counter value.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Return the inner numeric value.
            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u32>().map(Self)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a caja (storage box).
    CajaId
);

define_id!(
    /// Unique identifier for an expediente (document folder).
    ExpedienteId
);
