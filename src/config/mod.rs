//! Configuration loading and management
//!
//! Settings come from an optional YAML file and are then overridden by
//! environment variables:
//!
//! ```yaml
//! host: 127.0.0.1
//! port: 8080
//! seed_data: false
//! cors: true
//! log_filter: bookstore=debug,tower_http=info
//! ```

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names a config file to load at startup
pub const CONFIG_PATH_VAR: &str = "BOOKSTORE_CONFIG";
pub const HOST_VAR: &str = "BOOKSTORE_HOST";
pub const PORT_VAR: &str = "BOOKSTORE_PORT";
pub const SEED_DATA_VAR: &str = "BOOKSTORE_SEED_DATA";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// TCP port to bind
    pub port: u16,

    /// Load the demo catalogue at startup
    pub seed_data: bool,

    /// Allow cross-origin requests from any origin
    pub cors: bool,

    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            seed_data: true,
            cors: true,
            log_filter: "bookstore=info,tower_http=info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from the process environment: the file named by
    /// `BOOKSTORE_CONFIG` (if any), then variable overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::load`] with a custom variable lookup
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(lookup)
    }

    /// Apply `BOOKSTORE_HOST`, `BOOKSTORE_PORT` and `BOOKSTORE_SEED_DATA`
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_VAR) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: PORT_VAR.to_string(),
                value: port.clone(),
                message: format!("{}", e),
            })?;
        }
        if let Some(seed) = lookup(SEED_DATA_VAR) {
            self.seed_data = parse_flag(&seed).ok_or_else(|| ConfigError::InvalidValue {
                key: SEED_DATA_VAR.to_string(),
                value: seed.clone(),
                message: "expected true/false".to_string(),
            })?;
        }
        Ok(self)
    }

    /// Address to bind, as `host:port`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "t" | "yes" => Some(true),
        "false" | "0" | "f" | "no" => Some(false),
        _ => None,
    }
}
