//! Application configuration
//!
//! Loaded from a TOML file, by default `<config_dir>/garage-service/config.toml`.
//! Every section and key is optional; missing values fall back to defaults.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! shutdown_timeout = 30
//!
//! [database]
//! path = "/var/lib/garage-service/garage.db"
//! max_connections = 10
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::DatabaseConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// Full connection URL. Takes precedence over `path`.
    pub url: Option<String>,
    /// SQLite file, created if missing
    pub path: String,
    /// Pool size for server databases. SQLite always uses one connection.
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            path: "garage.db".to_string(),
            max_connections: 10,
        }
    }
}

impl DatabaseSection {
    /// `DATABASE_URL`, then `url`, then a SQLite URL built from `path`.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .or_else(|| self.url.clone())
            .unwrap_or_else(|| DatabaseConfig::sqlite(&self.path).url)
    }

    pub fn to_database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.connection_url(),
            max_connections: self.max_connections,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` overrides it
    pub level: String,
    /// `"json"` or `"pretty"`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `<config_dir>/garage-service/config.toml`, or `./config.toml` when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("garage-service"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.toml")
}
