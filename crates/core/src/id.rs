//! Strongly-typed identifiers used across the storefront.
//!
//! Catalog rows are keyed by the store's integer primary keys, so ids wrap an
//! `i32` rather than a generated UUID.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a category group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(i32);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        /// Parses the URL form: ASCII digits only, no sign.
        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::invalid_id(format!("{}: expected digits, got {s:?}", $name)));
                }
                let value = s
                    .parse::<i32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(GroupId, "GroupId");
impl_int_newtype!(ProductId, "ProductId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!("42".parse::<GroupId>().unwrap(), GroupId::new(42));
        assert_eq!("007".parse::<ProductId>().unwrap().get(), 7);
    }

    #[test]
    fn rejects_signs_and_garbage() {
        for input in ["", "-1", "+1", "1a", " 1", "1.0"] {
            match input.parse::<GroupId>() {
                Err(DomainError::InvalidId(_)) => {}
                other => panic!("expected InvalidId for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!("99999999999".parse::<GroupId>().is_err());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&GroupId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
