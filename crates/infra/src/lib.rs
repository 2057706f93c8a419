//! Infrastructure layer: catalog storage adapters, DB pool, config.

pub mod catalog_store;
pub mod config;
pub mod db;


pub use catalog_store::{CatalogStore, CatalogStoreError, InMemoryCatalogStore, PostgresCatalogStore};
pub use config::{ConfigError, DatabaseConfig, StorefrontConfig};
