//! Storefront channel selection.
//!
//! Several storefronts share one catalog database. Each storefront owns a
//! flag column on `proizvodi` and `covers`; a product belongs to the
//! storefront when the column holds the product marker, a cover when it holds
//! the cover marker.
//!
//! The column name and markers end up inside SQL text (the column may be
//! `boolean`, `char` or `text`, so markers are written as untyped literals).
//! Both are therefore restricted to plain identifier / alphanumeric shapes at
//! construction time. The column is stored lowercased, the name Postgres
//! resolves an unquoted identifier to.

use storefront_core::{DomainError, DomainResult};

pub const DEFAULT_COLUMN: &str = "amadeus2hr";
pub const DEFAULT_PRODUCT_MARKER: &str = "x";
pub const DEFAULT_COVER_MARKER: &str = "t";

/// Longest identifier Postgres keeps without truncation.
const MAX_IDENTIFIER_LEN: usize = 63;
const MAX_MARKER_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontChannel {
    column: String,
    product_marker: String,
    cover_marker: String,
}

impl StorefrontChannel {
    pub fn new(
        column: impl Into<String>,
        product_marker: impl Into<String>,
        cover_marker: impl Into<String>,
    ) -> DomainResult<Self> {
        let column = column.into().to_ascii_lowercase();
        let product_marker = product_marker.into();
        let cover_marker = cover_marker.into();

        validate_column(&column)?;
        validate_marker("product marker", &product_marker)?;
        validate_marker("cover marker", &cover_marker)?;

        Ok(Self {
            column,
            product_marker,
            cover_marker,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn product_marker(&self) -> &str {
        &self.product_marker
    }

    pub fn cover_marker(&self) -> &str {
        &self.cover_marker
    }
}

impl Default for StorefrontChannel {
    fn default() -> Self {
        Self {
            column: DEFAULT_COLUMN.to_string(),
            product_marker: DEFAULT_PRODUCT_MARKER.to_string(),
            cover_marker: DEFAULT_COVER_MARKER.to_string(),
        }
    }
}

/// Unquoted identifier: `[A-Za-z_][A-Za-z0-9_]*`.
fn validate_column(column: &str) -> DomainResult<()> {
    let mut bytes = column.bytes();
    let first_ok = matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic() || b == b'_');
    let rest_ok = bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_');

    if !first_ok || !rest_ok || column.len() > MAX_IDENTIFIER_LEN {
        return Err(DomainError::validation(format!(
            "channel column must be a plain SQL identifier, got {column:?}"
        )));
    }
    Ok(())
}

fn validate_marker(what: &str, marker: &str) -> DomainResult<()> {
    if marker.is_empty()
        || marker.len() > MAX_MARKER_LEN
        || !marker.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        return Err(DomainError::validation(format!(
            "{what} must be 1-{MAX_MARKER_LEN} ASCII letters or digits, got {marker:?}"
        )));
    }
    Ok(())
}
