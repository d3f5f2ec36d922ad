//! Typed identifier newtypes backed by UUIDs.
//!
//! Ids are assigned by the application when a record is first stored and
//! are opaque to clients: they travel as plain UUID strings in JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }

            /// Parse client input, reporting failures as a validation error.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::InvalidId`] when `input` is not a UUID.
            pub fn parse(input: &str) -> Result<Self, ValidationError> {
                Self::from_str(input).map_err(|_| ValidationError::InvalidId(input.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Product`](crate::product::Product).
    ProductId
);

define_id!(
    /// Unique identifier for the [`ShopInfo`](crate::shop_info::ShopInfo) record.
    ShopInfoId
);
