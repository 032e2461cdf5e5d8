//! Configuration management for the `Yatra` application
//!
//! Settings come from `YATRA_*` environment variables with sensible
//! defaults, so the service runs out of the box against the bundled
//! sample catalog.

use std::env;

use serde::{Deserialize, Serialize};

/// Root configuration structure for the `Yatra` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YatraConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Catalog data configuration
    pub data: DataConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma-separated CORS allow-origins, "*" for any
    #[serde(default = "default_allow_origins")]
    pub allow_origins: String,
}

/// Catalog data configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the catalog JSON file
    #[serde(default = "default_data_path")]
    pub path: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allow_origins() -> String {
    "*".to_string()
}

fn default_data_path() -> String {
    "data/sample_data.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Log level from `YATRA_LOG_LEVEL`, or the default.
///
/// Split out from [`YatraConfig::load`] so the tracing subscriber can be
/// installed before the full config load runs; `load` emits warnings and
/// would otherwise log into the void.
#[must_use]
pub fn env_log_level() -> String {
    env::var("YATRA_LOG_LEVEL").unwrap_or_else(|_| default_log_level())
}

impl Default for YatraConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                allow_origins: default_allow_origins(),
            },
            data: DataConfig {
                path: default_data_path(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        }
    }
}

impl YatraConfig {
    /// Load configuration from `YATRA_*` environment variables, falling back
    /// to defaults for anything unset or unparsable
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("YATRA_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("YATRA_PORT") {
            match port.parse() {
                Ok(port) => config.server.port = port,
                Err(_) => tracing::warn!("Ignoring unparsable YATRA_PORT: {port}"),
            }
        }
        if let Ok(origins) = env::var("YATRA_CORS_ALLOW_ORIGINS") {
            config.server.allow_origins = origins;
        }
        if let Ok(path) = env::var("YATRA_DATA_PATH") {
            config.data.path = path;
        }
        config.logging.level = env_log_level();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = YatraConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.allow_origins, "*");
        assert_eq!(config.data.path, "data/sample_data.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_log_level_falls_back_to_default() {
        // Only this test touches YATRA_LOG_LEVEL, so the mutation cannot
        // race with the other config tests.
        unsafe { env::remove_var("YATRA_LOG_LEVEL") };
        assert_eq!(env_log_level(), "info");

        unsafe { env::set_var("YATRA_LOG_LEVEL", "debug") };
        assert_eq!(env_log_level(), "debug");
        unsafe { env::remove_var("YATRA_LOG_LEVEL") };
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let json = r#"{"server": {"port": 9000}, "data": {}, "logging": {}}"#;
        let config: YatraConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.data.path, "data/sample_data.json");
    }
}
