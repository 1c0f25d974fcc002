//! Database library providing the SQLite connector and pool utilities
//!
//! This library owns how the workspace opens and closes database connections.
//! Domain crates receive a ready pool and never touch connection options.
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with sqlx
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Examples
//!
//! ```ignore
//! use database::sqlite::{self, SqliteConfig};
//!
//! let config = SqliteConfig::new("tasks.db");
//! let pool = sqlite::connect_from_config(&config).await?;
//!
//! sqlx::query("SELECT 1").execute(&pool).await?;
//!
//! sqlite::close(&pool).await;
//! ```
//!
//! With configuration from the environment (requires the `config` feature):
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::sqlite::{self, SqliteConfig};
//!
//! let config = SqliteConfig::from_env()?;
//! let pool = sqlite::connect_from_config(&config).await?;
//! ```

#[cfg(feature = "sqlite")]
pub mod sqlite;
