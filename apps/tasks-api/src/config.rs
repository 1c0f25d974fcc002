//! Configuration for Tasks API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::sqlite::SqliteConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub sqlite: SqliteConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub seed_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let sqlite = SqliteConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        // Opt-in; anything but the literal `true` stays off
        let seed_data = std::env::var("SEED_DATA")
            .map(|value| value == "true")
            .unwrap_or(false);

        Ok(Self {
            app: app_info!(),
            sqlite,
            server,
            environment,
            seed_data,
        })
    }
}
