//! Load `AppConfig` from the process environment (after `.env`), or from any key lookup.

use crate::config::types::*;
use crate::error::ConfigError;
use crate::sql::Dialect;
use std::time::Duration;

impl AppConfig {
    /// Read `.env` if present, then the environment. `default_database_url` is used when
    /// `DATABASE_URL` is unset.
    pub fn from_env(default_database_url: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(default_database_url, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(default_database_url: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| default_database_url.to_string());
        Dialect::from_url(&database_url)?;

        let mut config = AppConfig::new(database_url);
        if let Some(secret) = get("SECRET_KEY") {
            config.secret_key = secret;
        }
        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(size) = get("DATABASE_POOL_SIZE") {
            config.pool.max_connections = parse_number("DATABASE_POOL_SIZE", &size)?;
            if config.pool.max_connections == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "DATABASE_POOL_SIZE",
                    value: size,
                });
            }
        }
        if let Some(secs) = get("DATABASE_POOL_RECYCLE_SECS") {
            let secs: u64 = parse_number("DATABASE_POOL_RECYCLE_SECS", &secs)?;
            config.pool.max_lifetime = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
