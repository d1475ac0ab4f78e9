//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PETFINDER_*` environment variables and an
//! optional config file, in OrthoConfig's precedence order. Unset values fall
//! back to the defaults below through the accessors.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use petfinder::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_MIN_IDLE: u32 = 2;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Startup configuration for the HTTP server and its database pool.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PETFINDER")]
pub struct ServerSettings {
    /// PostgreSQL connection string. Required.
    pub database_url: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    pub pool_max_size: Option<u32>,
    pub pool_min_idle: Option<u32>,
    pub pool_connection_timeout_secs: Option<u64>,
    /// Apply pending migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// The configured database URL.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] when no URL is configured.
    pub fn database_url(&self) -> std::io::Result<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "PETFINDER_DATABASE_URL must be set",
                )
            })
    }

    /// The listen address, defaulting to `0.0.0.0:3000`.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] for an unparsable address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Pool parameters built from the settings.
    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
            .with_min_idle(Some(self.pool_min_idle.unwrap_or(DEFAULT_POOL_MIN_IDLE)))
            .with_connection_timeout(Duration::from_secs(
                self.pool_connection_timeout_secs
                    .unwrap_or(DEFAULT_POOL_TIMEOUT_SECS),
            ))
    }
}
