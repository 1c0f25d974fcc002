use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::PathBuf;
use tracing::info;

use super::SqliteConfig;

/// Connect to a SQLite database with default pool settings
///
/// # Arguments
/// * `path` - Path to the database file; created when missing
///
/// # Example
/// ```ignore
/// use database::sqlite::connect;
///
/// let pool = connect("tasks.db").await?;
/// ```
pub async fn connect(path: impl Into<PathBuf>) -> Result<SqlitePool, sqlx::Error> {
    connect_from_config(&SqliteConfig::new(path)).await
}

/// Connect using a SqliteConfig
///
/// This is the recommended way to connect when using configuration.
///
/// # Example
/// ```ignore
/// use database::sqlite::{SqliteConfig, connect_from_config};
///
/// let config = SqliteConfig::new("tasks.db");
/// let pool = connect_from_config(&config).await?;
/// ```
///
/// With FromEnv (requires `config` feature):
/// ```ignore
/// use database::sqlite::connect_from_config;
/// use core_config::FromEnv;
///
/// let config = SqliteConfig::from_env()?;
/// let pool = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &SqliteConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await?;

    info!(path = %config.path.display(), "Successfully connected to SQLite database");

    Ok(pool)
}

/// Close the connection pool gracefully
///
/// Waits for checked-out connections to be returned before closing them.
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
    info!("SQLite connection pool closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_in_memory() {
        let config = SqliteConfig::new(":memory:");
        let pool = connect_from_config(&config).await.unwrap();

        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);

        close(&pool).await;
        assert!(pool.is_closed());
    }

    #[tokio::test]
    async fn test_connect_creates_missing_file() {
        let path = std::env::temp_dir().join(format!("sqlite-connector-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let config = SqliteConfig::new(&path);
        let pool = connect_from_config(&config).await.unwrap();
        assert!(path.exists());

        close(&pool).await;
        let _ = std::fs::remove_file(&path);
        // WAL sidecar files linger if the pool was interrupted
        let _ = std::fs::remove_file(path.with_extension("db-wal"));
        let _ = std::fs::remove_file(path.with_extension("db-shm"));
    }

    #[tokio::test]
    async fn test_connect_missing_file_errors() {
        let mut config = SqliteConfig::new("/nonexistent/path/tasks.db");
        config.create_if_missing = false;

        let result = connect_from_config(&config).await;
        assert!(result.is_err());
    }
}
