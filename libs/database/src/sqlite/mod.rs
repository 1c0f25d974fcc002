//! SQLite database connector and utilities
//!
//! Provides connection pool construction and SQLite-specific connection options.

mod config;
mod connector;

pub use config::SqliteConfig;
pub use connector::{close, connect, connect_from_config};

// Re-export sqlx types for convenience
pub use sqlx::SqlitePool;
pub use sqlx::sqlite::SqliteConnectOptions;
