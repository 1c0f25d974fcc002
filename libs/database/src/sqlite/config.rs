use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use std::path::{Path, PathBuf};

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default};

/// SQLite database configuration
///
/// This struct holds the database file location and pool settings for SQLite.
/// It can be constructed manually or loaded from environment variables (with `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
///
/// // Manual construction
/// let config = SqliteConfig::new("tasks.db");
///
/// // From environment variables (requires `config` feature)
/// let config = SqliteConfig::from_env()?;
///
/// // Convert to SqliteConnectOptions for use with connect_from_config()
/// let options = config.connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Path to the database file, or `:memory:` for an in-memory database
    pub path: PathBuf,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Create the database file if it does not exist
    pub create_if_missing: bool,
}

impl SqliteConfig {
    /// Create a new SqliteConfig with default pool settings
    ///
    /// # Arguments
    /// * `path` - Path to the database file
    ///
    /// # Example
    /// ```ignore
    /// let config = SqliteConfig::new("tasks.db");
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
            create_if_missing: true,
        }
    }

    /// Create a SqliteConfig with a custom pool size
    ///
    /// # Example
    /// ```ignore
    /// let config = SqliteConfig::with_max_connections("tasks.db", 10);
    /// ```
    pub fn with_max_connections(path: impl Into<PathBuf>, max_connections: u32) -> Self {
        Self {
            path: path.into(),
            max_connections,
            create_if_missing: true,
        }
    }

    /// Convert this config into sqlx connection options
    ///
    /// WAL journaling keeps readers from blocking behind the single writer.
    /// In-memory databases ignore the journal pragma.
    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(self.create_if_missing)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
    }

    /// Get a reference to the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("tasks.db"),
            max_connections: 5,
            create_if_missing: true,
        }
    }
}

/// Load SqliteConfig from environment variables
///
/// Environment variables:
/// - `SQLITE_PATH` (optional, default: tasks.db)
/// - `SQLITE_MAX_CONNECTIONS` (optional, default: 5)
/// - `SQLITE_CREATE_IF_MISSING` (optional, default: true)
///
/// # Example
/// ```ignore
/// use database::sqlite::SqliteConfig;
/// use core_config::FromEnv;
///
/// let config = SqliteConfig::from_env()?;
/// ```
#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let path = PathBuf::from(env_or_default("SQLITE_PATH", "tasks.db"));

        let max_connections = env_or_default("SQLITE_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "SQLITE_MAX_CONNECTIONS".to_string(),
                details: format!("{}", e),
            })?;

        let create_if_missing = env_or_default("SQLITE_CREATE_IF_MISSING", "true")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "SQLITE_CREATE_IF_MISSING".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            path,
            max_connections,
            create_if_missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_config_new() {
        let config = SqliteConfig::new("tasks.db");
        assert_eq!(config.path, PathBuf::from("tasks.db"));
        assert_eq!(config.max_connections, 5);
        assert!(config.create_if_missing);
    }

    #[test]
    fn test_sqlite_config_with_max_connections() {
        let config = SqliteConfig::with_max_connections("tasks.db", 10);
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn test_sqlite_config_connect_options() {
        let config = SqliteConfig::new("tasks.db");
        let _options = config.connect_options();
        // Can't easily assert on SqliteConnectOptions internals, but verify it builds
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sqlite_config_from_env_defaults() {
        temp_env::with_vars_unset(
            ["SQLITE_PATH", "SQLITE_MAX_CONNECTIONS", "SQLITE_CREATE_IF_MISSING"],
            || {
                let config = SqliteConfig::from_env();
                assert!(config.is_ok());
                let config = config.unwrap();
                assert_eq!(config.path, PathBuf::from("tasks.db")); // default
                assert_eq!(config.max_connections, 5); // default
                assert!(config.create_if_missing); // default
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sqlite_config_from_env_custom() {
        temp_env::with_vars(
            [
                ("SQLITE_PATH", Some("/var/lib/tasks/tasks.db")),
                ("SQLITE_MAX_CONNECTIONS", Some("20")),
                ("SQLITE_CREATE_IF_MISSING", Some("false")),
            ],
            || {
                let config = SqliteConfig::from_env();
                assert!(config.is_ok());
                let config = config.unwrap();
                assert_eq!(config.path, PathBuf::from("/var/lib/tasks/tasks.db"));
                assert_eq!(config.max_connections, 20);
                assert!(!config.create_if_missing);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sqlite_config_from_env_invalid_number() {
        temp_env::with_var("SQLITE_MAX_CONNECTIONS", Some("invalid"), || {
            let config = SqliteConfig::from_env();
            assert!(config.is_err());
            let err = config.unwrap_err();
            assert!(err.to_string().contains("SQLITE_MAX_CONNECTIONS"));
        });
    }
}
