//! MySQL connection pool setup and liveness probe

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::application::ports::outbound::StoreHealthPort;
use crate::infrastructure::config::AppConfig;

/// Open the shared bounded pool against the bot's database
///
/// The pool capacity comes from configuration; contention queues on
/// acquisition rather than failing. The bot stores text as utf8mb4.
pub async fn connect(config: &AppConfig) -> Result<MySqlPool> {
    let options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .charset("utf8mb4");

    MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to the bot's database")
}

/// Liveness probe backed by the shared pool
pub struct MySqlStoreHealth {
    pool: MySqlPool,
}

impl MySqlStoreHealth {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealthPort for MySqlStoreHealth {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;
        Ok(())
    }
}
