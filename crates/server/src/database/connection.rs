use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Error as SqlxError;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: Option<u32>,
}

impl DbConfig {
    pub const MAX_CONN_FALLBACK: u32 = 5;
    #[cfg(test)]
    const IN_MEMORY_URL: &'static str = "sqlite::memory:";

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            url: Self::IN_MEMORY_URL.to_string(),
            max_connections: None,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Every pooled connection to an in-memory url opens its own empty
    /// database, so those are pinned to a single connection.
    pub fn max_connections(&self) -> u32 {
        if self.is_in_memory() {
            return 1;
        }
        self.max_connections.unwrap_or(Self::MAX_CONN_FALLBACK)
    }
}

pub struct DbConnection {
    pool: SqlitePool,
}

impl DbConnection {
    pub async fn connect(config: &DbConfig) -> Result<Self, SqlxError> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections());
        if config.is_in_memory() {
            // dropping the last connection would discard the database
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let pool = pool_options.connect_with(options).await?;
        info!("connected to database: {}", config.url);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
