//! `storefront-core`: shared storefront primitives.
//!
//! Identifiers, the domain error type, and URL slug helpers. No IO lives here.

pub mod error;
pub mod id;
pub mod slug;

pub use error::{DomainError, DomainResult};
pub use id::{GroupId, ProductId};
pub use slug::{slugify, split_slugged_id};
