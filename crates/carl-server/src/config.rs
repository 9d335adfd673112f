//! Server configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Database configuration.
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Directory holding the database file.
    #[serde(default = "default_db_host")]
    pub host: PathBuf,

    /// Database name; the file is `<host>/<name>.db`.
    #[serde(default = "default_db_name")]
    pub name: String,

    #[serde(default = "default_db_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    /// Maximum number of pooled connections.
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: u32,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// How long a request waits for a pooled connection, in milliseconds.
    #[serde(default = "default_acquire_timeout_ms")]
    pub acquire_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "carl_db=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    3000
}

fn default_db_host() -> PathBuf {
    carl_db::DbSettings::default().host
}

fn default_db_name() -> String {
    carl_db::DbSettings::default().name
}

fn default_db_user() -> String {
    carl_db::DbSettings::default().user
}

fn default_pool_max_size() -> u32 {
    carl_db::DbSettings::default().pool_max_size
}

fn default_busy_timeout_ms() -> u64 {
    carl_db::DbSettings::default().busy_timeout_ms
}

fn default_acquire_timeout_ms() -> u64 {
    carl_db::DbSettings::default().acquire_timeout_ms
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            name: default_db_name(),
            user: default_db_user(),
            password: String::new(),
            pool_max_size: default_pool_max_size(),
            busy_timeout_ms: default_busy_timeout_ms(),
            acquire_timeout_ms: default_acquire_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    /// Converts the file/env view into provisioning settings.
    pub fn to_settings(&self) -> carl_db::DbSettings {
        carl_db::DbSettings {
            host: self.host.clone(),
            name: self.name.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            pool_max_size: self.pool_max_size,
            busy_timeout_ms: self.busy_timeout_ms,
            acquire_timeout_ms: self.acquire_timeout_ms,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Same redaction as DbSettings.
        std::fmt::Debug::fmt(&self.to_settings(), f)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `CARL_HOST` overrides `server.host`
/// - `CARL_PORT` overrides `server.port`
/// - `DB_HOST` overrides `database.host`
/// - `DB_NAME` overrides `database.name`
/// - `DB_USER` overrides `database.user`
/// - `DB_PASS` overrides `database.password`
/// - `CARL_DB_POOL_MAX_SIZE` overrides `database.pool_max_size`
/// - `CARL_LOG_LEVEL` overrides `logging.level`
/// - `CARL_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

fn load_config_with(
    path: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    if let Some(host) = env("CARL_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Some(port) = env("CARL_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Some(host) = env("DB_HOST") {
        config.database.host = PathBuf::from(host);
    }
    if let Some(name) = env("DB_NAME") {
        config.database.name = name;
    }
    if let Some(user) = env("DB_USER") {
        config.database.user = user;
    }
    if let Some(password) = env("DB_PASS") {
        config.database.password = password;
    }
    if let Some(size) = env("CARL_DB_POOL_MAX_SIZE") {
        if let Ok(parsed) = size.parse() {
            config.database.pool_max_size = parsed;
        }
    }
    if let Some(level) = env("CARL_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = env("CARL_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}
