use std::sync::Arc;

use anyhow::Context;

use storefront_catalog::{CategoryGroup, CoverEntry};
use storefront_infra::{
    CatalogStore, CatalogStoreError, PostgresCatalogStore, StorefrontConfig, db,
};

/// Everything the landing page shows, read in one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    pub groups: Vec<CategoryGroup>,
    pub covers: Vec<CoverEntry>,
}

/// Handles shared by all handlers.
///
/// The catalog is held as a trait object so tests can substitute the
/// in-memory store for Postgres.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn CatalogStore>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Read groups, then covers. Either failure fails the whole page; no
    /// partial result is returned.
    pub async fn landing_page(&self) -> Result<LandingPage, CatalogStoreError> {
        let groups = self.catalog.list_visible_groups().await?;
        let covers = self.catalog.list_active_covers().await?;
        Ok(LandingPage { groups, covers })
    }
}

/// Wire the Postgres-backed services from configuration.
pub async fn build_services(config: &StorefrontConfig) -> anyhow::Result<AppServices> {
    let pool = db::connect(&config.database)
        .await
        .context("failed to connect to the catalog database")?;

    tracing::info!(channel = config.channel.column(), "using postgres catalog store");
    let store = PostgresCatalogStore::new(pool, config.channel.clone());

    Ok(AppServices::new(Arc::new(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{GroupId, ProductId};
    use storefront_infra::catalog_store::{InMemoryCatalogStore, StoredCover, StoredGroup, StoredProduct};

    fn store() -> Arc<InMemoryCatalogStore> {
        let store = Arc::new(InMemoryCatalogStore::new());
        store.insert_group(StoredGroup {
            id: GroupId::new(1),
            name: "Mobiteli".to_string(),
            markup: String::new(),
        });
        store.insert_product(StoredProduct {
            id: ProductId::new(1),
            group_id: GroupId::new(1),
            published: true,
        });
        store.insert_cover(StoredCover {
            link: "/img/jesen.jpg".to_string(),
            promo_url: "/akcija".to_string(),
            active: true,
            position: 0,
        });
        store
    }

    #[tokio::test]
    async fn landing_page_combines_both_reads() {
        let services = AppServices::new(store());
        let page = services.landing_page().await.unwrap();
        assert_eq!(page.groups.len(), 1);
        assert_eq!(page.covers, vec![CoverEntry::new("/img/jesen.jpg", "/akcija")]);
    }

    #[tokio::test]
    async fn landing_page_has_no_partial_result() {
        let store = store();
        store.set_unavailable(true);
        let services = AppServices::new(store);
        let err = services.landing_page().await.unwrap_err();
        assert_eq!(err.operation(), "list_visible_groups");
    }
}
