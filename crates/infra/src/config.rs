//! Configuration loading and representation.
//!
//! Values come from the process environment, after an optional `.env` file
//! in the working directory has been loaded. Only `DATABASE_URL` is required.

use std::{fmt, net::SocketAddr, str::FromStr};

use thiserror::Error;
use tracing::info;

use storefront_catalog::StorefrontChannel;
use storefront_catalog::channel::{DEFAULT_COLUMN, DEFAULT_COVER_MARKER, DEFAULT_PRODUCT_MARKER};
use storefront_core::DomainError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be set")]
    Missing { key: &'static str },

    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("invalid storefront channel: {0}")]
    Channel(#[from] DomainError),

    #[error("failed to read .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

// The URL usually embeds a password.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
    pub channel: StorefrontChannel,
}

impl StorefrontConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_file_loaded = dotenvy::dotenv().map(|_| true).or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(err),
        })?;
        if env_file_loaded {
            info!("loaded .env file");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing { key: "DATABASE_URL" })?;

        let database = DatabaseConfig {
            url,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout_secs: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", DEFAULT_ACQUIRE_TIMEOUT_SECS)?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                message: "must be at least 1".to_string(),
            });
        }

        let bind_addr = parse_or(&lookup, "BIND_ADDR", default_bind_addr())?;

        let channel = StorefrontChannel::new(
            lookup("STOREFRONT_CHANNEL").unwrap_or_else(|| DEFAULT_COLUMN.to_string()),
            lookup("CHANNEL_PRODUCT_MARK").unwrap_or_else(|| DEFAULT_PRODUCT_MARKER.to_string()),
            lookup("CHANNEL_COVER_MARK").unwrap_or_else(|| DEFAULT_COVER_MARKER.to_string()),
        )?;

        Ok(Self {
            bind_addr,
            database,
            channel,
        })
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5000))
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: format!("{raw:?}: {e}"),
        }),
    }
}
