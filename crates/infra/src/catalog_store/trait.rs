use std::sync::Arc;

use thiserror::Error;

use storefront_catalog::{CategoryGroup, CoverEntry};

/// The single failure kind of the catalog read path.
///
/// Raised when the store cannot be reached or rejects a query. Never retried
/// and never accompanied by partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogStoreError {
    #[error("data access failed in {operation}: {message}")]
    DataAccess {
        operation: &'static str,
        message: String,
    },
}

impl CatalogStoreError {
    pub fn data_access(operation: &'static str, message: impl Into<String>) -> Self {
        Self::DataAccess {
            operation,
            message: message.into(),
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            Self::DataAccess { operation, .. } => operation,
        }
    }
}

/// Read-only catalog projection consumed by the landing page.
///
/// Both operations are idempotent single-shot reads; every call goes back to
/// the source of truth.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// Groups with at least one product published on this storefront
    /// channel. Order is whatever the store yields.
    async fn list_visible_groups(&self) -> Result<Vec<CategoryGroup>, CatalogStoreError>;

    /// Covers flagged active for this storefront channel, ascending by
    /// display position.
    async fn list_active_covers(&self) -> Result<Vec<CoverEntry>, CatalogStoreError>;
}

#[async_trait::async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn list_visible_groups(&self) -> Result<Vec<CategoryGroup>, CatalogStoreError> {
        (**self).list_visible_groups().await
    }

    async fn list_active_covers(&self) -> Result<Vec<CoverEntry>, CatalogStoreError> {
        (**self).list_active_covers().await
    }
}
