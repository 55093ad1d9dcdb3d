use config::ConfigError;
use serde::Deserialize;
use std::env;
use std::time::Duration;

// Top-level configuration, one section per concern
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

// HTTP server and logging
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

// Database pool and startup retry
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub acquire_timeout_seconds: u64,
    pub connect_attempts: u32,
    pub connect_retry_delay_seconds: u64,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }

    pub fn connect_retry_delay(&self) -> Duration {
        Duration::from_secs(self.connect_retry_delay_seconds)
    }
}

// (environment variable, config key)
const ENV_KEYS: &[(&str, &str)] = &[
    ("HOST", "app.host"),
    ("PORT", "app.port"),
    ("ENVIRONMENT", "app.environment"),
    ("RUST_LOG", "app.rust_log"),
    ("DATABASE_URL", "database.url"),
    ("DB_POOL_SIZE", "database.pool_size"),
    ("DB_ACQUIRE_TIMEOUT_SECONDS", "database.acquire_timeout_seconds"),
    ("DB_CONNECT_ATTEMPTS", "database.connect_attempts"),
    ("DB_CONNECT_RETRY_DELAY_SECONDS", "database.connect_retry_delay_seconds"),
];

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// Everything except `DATABASE_URL` has a default; an empty URL is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8000_i64)?
            .set_default("app.environment", "development")?
            .set_default("app.rust_log", "catalog_service=debug,tower_http=debug")?
            .set_default("database.pool_size", 10_i64)?
            .set_default("database.acquire_timeout_seconds", 5_i64)?
            .set_default("database.connect_attempts", 10_i64)?
            .set_default("database.connect_retry_delay_seconds", 3_i64)?;

        for (var, key) in ENV_KEYS {
            builder = builder.set_override_option(*key, lookup(var))?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        if config.database.url.trim().is_empty() {
            return Err(ConfigError::Message("DATABASE_URL must not be empty".into()));
        }

        Ok(config)
    }
}
