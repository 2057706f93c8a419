//! Catalog read boundary for the landing page.
//!
//! Callers depend on the [`CatalogStore`] trait; production wires the
//! Postgres adapter and tests wire the in-memory one.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::{InMemoryCatalogStore, StoredCover, StoredGroup, StoredProduct};
pub use postgres::PostgresCatalogStore;
pub use r#trait::{CatalogStore, CatalogStoreError};
