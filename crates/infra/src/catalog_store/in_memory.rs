use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use storefront_catalog::{CategoryGroup, CoverEntry};
use storefront_core::{GroupId, ProductId};

use super::r#trait::{CatalogStore, CatalogStoreError};

/// Raw `grupe` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredGroup {
    pub id: GroupId,
    pub name: String,
    pub markup: String,
}

/// Raw `proizvodi` row, reduced to what the listing reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProduct {
    pub id: ProductId,
    pub group_id: GroupId,
    /// Channel flag already resolved against the storefront's marker.
    pub published: bool,
}

/// Raw `covers` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCover {
    pub link: String,
    pub promo_url: String,
    pub active: bool,
    pub position: i32,
}

#[derive(Debug, Default)]
struct Tables {
    groups: Vec<StoredGroup>,
    products: Vec<StoredProduct>,
    covers: Vec<StoredCover>,
}

/// In-memory catalog for tests/dev.
///
/// Evaluates the same rules as the SQL adapter over raw rows, so callers can
/// seed products and covers instead of precomputed results. Groups come back
/// in insertion order. `set_unavailable(true)` makes every read fail the way
/// an unreachable database does.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_group(&self, group: StoredGroup) {
        self.write().groups.push(group);
    }

    pub fn insert_product(&self, product: StoredProduct) {
        self.write().products.push(product);
    }

    pub fn insert_cover(&self, cover: StoredCover) {
        self.write().covers.push(cover);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    // Panics if an earlier writer panicked mid-seed.
    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Tables> {
        self.tables.write().expect("catalog tables lock poisoned")
    }

    fn check_available(&self, operation: &'static str) -> Result<(), CatalogStoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CatalogStoreError::data_access(operation, "store unavailable"));
        }
        Ok(())
    }

    fn read(&self, operation: &'static str) -> Result<std::sync::RwLockReadGuard<'_, Tables>, CatalogStoreError> {
        self.check_available(operation)?;
        self.tables
            .read()
            .map_err(|_| CatalogStoreError::data_access(operation, "lock poisoned"))
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_visible_groups(&self) -> Result<Vec<CategoryGroup>, CatalogStoreError> {
        let tables = self.read("list_visible_groups")?;

        let groups = tables
            .groups
            .iter()
            .map(|g| {
                let count = tables
                    .products
                    .iter()
                    .filter(|p| p.group_id == g.id && p.published)
                    .count() as i64;
                CategoryGroup::new(g.id, g.name.clone(), g.markup.clone(), count)
            })
            .filter(CategoryGroup::is_visible)
            .collect();

        Ok(groups)
    }

    async fn list_active_covers(&self) -> Result<Vec<CoverEntry>, CatalogStoreError> {
        let tables = self.read("list_active_covers")?;

        let mut active: Vec<&StoredCover> = tables.covers.iter().filter(|c| c.active).collect();
        // Stable: equal positions keep insertion order.
        active.sort_by_key(|c| c.position);

        Ok(active
            .into_iter()
            .map(|c| CoverEntry::new(c.link.clone(), c.promo_url.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(fut)
    }

    fn group(id: i32, name: &str) -> StoredGroup {
        StoredGroup {
            id: GroupId::new(id),
            name: name.to_string(),
            markup: format!("<img src=\"/g/{id}.png\">"),
        }
    }

    fn product(id: i32, group_id: i32, published: bool) -> StoredProduct {
        StoredProduct {
            id: ProductId::new(id),
            group_id: GroupId::new(group_id),
            published,
        }
    }

    fn cover(link: &str, url: &str, position: i32, active: bool) -> StoredCover {
        StoredCover {
            link: link.to_string(),
            promo_url: url.to_string(),
            active,
            position,
        }
    }

    #[tokio::test]
    async fn groups_without_eligible_products_are_hidden() {
        let store = InMemoryCatalogStore::new();
        store.insert_group(group(1, "A"));
        store.insert_group(group(2, "B"));
        store.insert_group(group(3, "C"));
        for id in 0..3 {
            store.insert_product(product(id, 1, true));
        }
        // B only has products published elsewhere.
        store.insert_product(product(10, 2, false));
        store.insert_product(product(11, 2, false));
        store.insert_product(product(20, 3, true));

        let groups = store.list_visible_groups().await.unwrap();
        let summary: Vec<(i32, i64)> = groups
            .iter()
            .map(|g| (g.id.get(), g.eligible_product_count))
            .collect();
        assert_eq!(summary, vec![(1, 3), (3, 1)]);
    }

    #[tokio::test]
    async fn covers_are_active_only_and_ordered_by_position() {
        let store = InMemoryCatalogStore::new();
        store.insert_cover(cover("link1", "url1", 2, true));
        store.insert_cover(cover("link2", "url2", 1, true));
        store.insert_cover(cover("link3", "url3", 0, false));

        let covers = store.list_active_covers().await.unwrap();
        assert_eq!(
            covers,
            vec![CoverEntry::new("link2", "url2"), CoverEntry::new("link1", "url1")]
        );
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryCatalogStore::new();
        assert!(store.list_visible_groups().await.unwrap().is_empty());
        assert!(store.list_active_covers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unavailable_store_fails_both_reads() {
        let store = InMemoryCatalogStore::new();
        store.insert_group(group(1, "A"));
        store.insert_product(product(1, 1, true));
        store.insert_cover(cover("l", "u", 0, true));
        store.set_unavailable(true);

        let err = store.list_visible_groups().await.unwrap_err();
        assert_eq!(err.operation(), "list_visible_groups");
        let err = store.list_active_covers().await.unwrap_err();
        assert_eq!(err.operation(), "list_active_covers");

        store.set_unavailable(false);
        assert_eq!(store.list_visible_groups().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn works_behind_an_arc_trait_object() {
        let store = std::sync::Arc::new(InMemoryCatalogStore::new());
        store.insert_cover(cover("l", "u", 0, true));
        let dyn_store: std::sync::Arc<dyn CatalogStore> = store;
        assert_eq!(dyn_store.list_active_covers().await.unwrap().len(), 1);
    }

    #[test]
    #[should_panic(expected = "catalog tables lock poisoned")]
    fn seeding_a_poisoned_store_panics_instead_of_dropping_rows() {
        let store = std::sync::Arc::new(InMemoryCatalogStore::new());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.tables.write().unwrap();
            panic!("seed failed mid-write");
        })
        .join();

        assert!(block_on(store.list_active_covers()).is_err());
        store.insert_cover(cover("l", "u", 0, true));
    }

    proptest! {
        /// Property: a group is listed iff it has a published product.
        #[test]
        fn group_visible_iff_published_product_exists(
            products in proptest::collection::vec((0i32..8, any::<bool>()), 0..40)
        ) {
            let store = InMemoryCatalogStore::new();
            for id in 0..8 {
                store.insert_group(group(id, "g"));
            }
            for (idx, (group_id, published)) in products.iter().enumerate() {
                store.insert_product(product(idx as i32, *group_id, *published));
            }

            let listed = block_on(store.list_visible_groups()).unwrap();

            for id in 0..8 {
                let expected = products.iter().filter(|(g, p)| *g == id && *p).count() as i64;
                let found = listed.iter().find(|g| g.id.get() == id);
                match found {
                    Some(g) => {
                        prop_assert!(expected > 0);
                        prop_assert_eq!(g.eligible_product_count, expected);
                    }
                    None => prop_assert_eq!(expected, 0),
                }
            }
        }

        /// Property: covers come back non-decreasing by position, inactive ones never.
        #[test]
        fn covers_sorted_and_filtered(
            covers in proptest::collection::vec((-5i32..5, any::<bool>()), 0..30)
        ) {
            let store = InMemoryCatalogStore::new();
            for (idx, (position, active)) in covers.iter().enumerate() {
                let tag = if *active { "on" } else { "off" };
                store.insert_cover(cover(&format!("{tag}-{idx}"), &position.to_string(), *position, *active));
            }

            let listed = block_on(store.list_active_covers()).unwrap();

            prop_assert_eq!(listed.len(), covers.iter().filter(|(_, a)| *a).count());
            prop_assert!(listed.iter().all(|c| c.link.starts_with("on-")));
            let positions: Vec<i32> = listed.iter().map(|c| c.promo_url.parse().unwrap()).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));

            // Idempotent: a second read is identical.
            let again = block_on(store.list_active_covers()).unwrap();
            prop_assert_eq!(listed, again);
        }
    }
}
