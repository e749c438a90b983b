use serde::Deserialize;
use std::env;

/// URL selecting the in-process document store instead of Postgres.
pub const MEMORY_URL: &str = "memory://";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Informational; the database is chosen by `url`.
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.url.starts_with(MEMORY_URL)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.port", 8501_i64)?
            .set_default("database.url", "postgres://localhost:5432/travelland")?
            .set_default("database.name", "travelland")?
            .set_default("database.max_connections", 5_i64)?
            .set_default("seed.enabled", true)?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // e.g. TRAVELLAND__DATABASE__URL=postgres://db:5432/travelland
            .add_source(config::Environment::with_prefix("TRAVELLAND").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
