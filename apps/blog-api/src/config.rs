//! Configuration for the Blog API

use core_config::{
    app_info, database::SqliteConfig, env_or_default, server::ServerConfig, AppInfo, FromEnv,
};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqliteConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Seed demo users/addresses/posts at startup (idempotent)
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqliteConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let seed_demo_data =
            env_or_default("SEED_DEMO_DATA", "false").eq_ignore_ascii_case("true");

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            seed_demo_data,
        })
    }
}
