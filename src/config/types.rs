//! Process configuration, built once at startup and passed to every component that needs it.

use std::time::Duration;

pub const DEFAULT_SECRET_KEY: &str = "fallback-secret-key";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_POOL_SIZE: u32 = 10;
pub const DEFAULT_POOL_RECYCLE: Duration = Duration::from_secs(3600);

/// Default store for the student registry: an SQLite file next to the process.
pub const STUDENTS_DEFAULT_DATABASE_URL: &str = "sqlite://students.db?mode=rwc";
/// Default store for the product catalog when `DATABASE_URL` is unset.
pub const PRODUCTS_DEFAULT_DATABASE_URL: &str = "sqlite://default.db?mode=rwc";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// Secret the flash-cookie signing key is derived from.
    pub secret_key: String,
    pub bind_addr: String,
    pub pool: PoolConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    /// Connections older than this are closed and replaced. `None` keeps them forever.
    pub max_lifetime: Option<Duration>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            max_connections: DEFAULT_POOL_SIZE,
            max_lifetime: Some(DEFAULT_POOL_RECYCLE),
        }
    }
}

impl AppConfig {
    /// Config with every knob at its default, pointed at `database_url`.
    pub fn new(database_url: impl Into<String>) -> Self {
        AppConfig {
            database_url: database_url.into(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            pool: PoolConfig::default(),
        }
    }

    pub fn uses_fallback_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
