//! Postgres connection pool.

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .test_before_acquire(true)
}

/// Connect eagerly; fails at startup when the database is unreachable.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(config).connect(&config.url).await?;
    info!(
        max_connections = config.max_connections,
        "connected to catalog database"
    );
    Ok(pool)
}

/// Build a pool that opens connections on first use.
///
/// Only the URL is parsed up front; an unreachable server surfaces later as a
/// per-request data-access error.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect_lazy(&config.url)
}
