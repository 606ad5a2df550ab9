//! SQLite pool setup

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use super::Config;

/// Migrations embedded from `migrations/`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open the pool described by `config` and bring the schema up to date
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid database URL: {}", config.database_url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to database: {}", config.database_url))?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    log::info!("Connected to database {}", config.database_url);
    Ok(pool)
}

/// Private in-memory database with the schema applied.
///
/// A single connection that never expires, so every query sees the same
/// database.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("registry.db");
        let config = Config {
            database_url: format!("sqlite://{}", db_path.display()),
            ..Config::default()
        };

        let pool = connect(&config).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM swift_codes")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(count, 0);
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_connect_fails_for_missing_directory() {
        let config = Config {
            database_url: "sqlite:///nonexistent-dir/sub/registry.db".to_string(),
            ..Config::default()
        };
        assert!(connect(&config).await.is_err());
    }
}
