//! Postgres-backed catalog store.
//!
//! Reads the shared catalog schema:
//!
//! | table       | columns                                               |
//! |-------------|-------------------------------------------------------|
//! | `grupe`     | `sifra` (id), `naziv` (name), `img_html` (markup)     |
//! | `proizvodi` | `grupa` → `grupe.sifra`, per-storefront channel flag  |
//! | `covers`    | `link`, `promourl`, channel flag, `pozicija`          |
//!
//! ## Error Mapping
//!
//! Every SQLx failure (unreachable server, pool timeout, rejected statement,
//! undecodable column) becomes `CatalogStoreError::DataAccess` tagged with
//! the operation name. Nothing is retried.
//!
//! ## Thread Safety
//!
//! `PostgresCatalogStore` is `Send + Sync`; each query checks out one
//! connection from the SQLx pool for its duration.

use std::sync::Arc;

use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::instrument;

use storefront_catalog::{CategoryGroup, CoverEntry, StorefrontChannel};
use storefront_core::GroupId;

use super::r#trait::{CatalogStore, CatalogStoreError};

#[derive(Debug, Clone)]
pub struct PostgresCatalogStore {
    pool: Arc<PgPool>,
    channel: StorefrontChannel,
    groups_sql: String,
    covers_sql: String,
}

impl PostgresCatalogStore {
    /// Create a store reading the given channel's slice of the catalog.
    pub fn new(pool: PgPool, channel: StorefrontChannel) -> Self {
        let groups_sql = visible_groups_sql(&channel);
        let covers_sql = active_covers_sql(&channel);
        Self {
            pool: Arc::new(pool),
            channel,
            groups_sql,
            covers_sql,
        }
    }
}

/// Eligibility is counted per group inside the statement, so the count and
/// the `> 0` filter see one snapshot of `proizvodi`.
fn visible_groups_sql(channel: &StorefrontChannel) -> String {
    format!(
        r#"
        SELECT sifra, naziv, img_html, broj_proizvoda
        FROM (
            SELECT
                g.sifra,
                g.naziv,
                g.img_html,
                (
                    SELECT COUNT(*)
                    FROM proizvodi p
                    WHERE p.grupa = g.sifra AND p.{column} = '{marker}'
                ) AS broj_proizvoda
            FROM grupe g
        ) x
        WHERE broj_proizvoda > 0
        "#,
        column = channel.column(),
        marker = channel.product_marker(),
    )
}

fn active_covers_sql(channel: &StorefrontChannel) -> String {
    format!(
        r#"
        SELECT link, promourl
        FROM covers
        WHERE {column} = '{marker}'
        ORDER BY pozicija ASC
        "#,
        column = channel.column(),
        marker = channel.cover_marker(),
    )
}

#[async_trait::async_trait]
impl CatalogStore for PostgresCatalogStore {
    #[instrument(skip(self), fields(channel = %self.channel.column()), err)]
    async fn list_visible_groups(&self) -> Result<Vec<CategoryGroup>, CatalogStoreError> {
        let rows = sqlx::query(&self.groups_sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_visible_groups", e))?;

        rows.iter()
            .map(group_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| map_sqlx_error("list_visible_groups", e))
    }

    #[instrument(skip(self), fields(channel = %self.channel.column()), err)]
    async fn list_active_covers(&self) -> Result<Vec<CoverEntry>, CatalogStoreError> {
        let rows = sqlx::query(&self.covers_sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_active_covers", e))?;

        rows.iter()
            .map(cover_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| map_sqlx_error("list_active_covers", e))
    }
}

// Text columns are nullable in the shared schema; NULL renders as empty.

fn group_from_row(row: &PgRow) -> Result<CategoryGroup, sqlx::Error> {
    let id: i32 = row.try_get("sifra")?;
    let name: Option<String> = row.try_get("naziv")?;
    let markup: Option<String> = row.try_get("img_html")?;
    let count: i64 = row.try_get("broj_proizvoda")?;

    Ok(CategoryGroup::new(
        GroupId::new(id),
        name.unwrap_or_default(),
        markup.unwrap_or_default(),
        count,
    ))
}

fn cover_from_row(row: &PgRow) -> Result<CoverEntry, sqlx::Error> {
    let link: Option<String> = row.try_get("link")?;
    let promo_url: Option<String> = row.try_get("promourl")?;

    Ok(CoverEntry::new(
        link.unwrap_or_default(),
        promo_url.unwrap_or_default(),
    ))
}

/// Map SQLx errors to `CatalogStoreError`.
fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> CatalogStoreError {
    let message = match err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => format!("database error {}: {}", code, db_err.message()),
            None => format!("database error: {}", db_err.message()),
        },
        sqlx::Error::PoolTimedOut => "timed out acquiring a connection".to_string(),
        sqlx::Error::PoolClosed => "connection pool closed".to_string(),
        sqlx::Error::Io(io) => format!("store unreachable: {io}"),
        other => other.to_string(),
    };
    CatalogStoreError::data_access(operation, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn groups_sql_filters_on_channel_inside_the_count() {
        let sql = squash(&visible_groups_sql(&StorefrontChannel::default()));
        assert!(sql.contains("WHERE p.grupa = g.sifra AND p.amadeus2hr = 'x'"));
        assert!(sql.ends_with("WHERE broj_proizvoda > 0"));
        assert!(!sql.contains("ORDER BY"));
    }

    #[test]
    fn covers_sql_orders_by_position() {
        let channel = StorefrontChannel::new("webshop2", "y", "1").unwrap();
        let sql = squash(&active_covers_sql(&channel));
        assert_eq!(
            sql,
            "SELECT link, promourl FROM covers WHERE webshop2 = '1' ORDER BY pozicija ASC"
        );
    }

    #[test]
    fn io_errors_map_to_data_access() {
        let err = map_sqlx_error(
            "list_active_covers",
            sqlx::Error::Io(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused")),
        );
        match err {
            CatalogStoreError::DataAccess { operation, message } => {
                assert_eq!(operation, "list_active_covers");
                assert!(message.contains("unreachable"));
            }
        }
    }
}
