// src/db.rs

use std::time::Duration;

use sqlx::{
    SqlitePool,
    migrate::{MigrateError, Migrator},
    sqlite::SqlitePoolOptions,
};

use crate::config::Config;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const MAX_CONNECT_RETRIES: u32 = 5;

/// Opens the pool, retrying while the database is not reachable yet.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let mut retry_count = 0;
    loop {
        match pool_options(&config.database_url)
            .connect(&config.database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                retry_count += 1;
                if retry_count > MAX_CONNECT_RETRIES {
                    return Err(e);
                }
                tracing::warn!(
                    "Database not ready, retrying in 2s... (Attempt {}): {}",
                    retry_count,
                    e
                );
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}

/// Every SQLite connection to `:memory:` gets its own database, so an
/// in-memory pool is held to one connection that is never recycled.
fn pool_options(database_url: &str) -> SqlitePoolOptions {
    let options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(3));

    if is_in_memory(database_url) {
        options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options.max_connections(5)
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
