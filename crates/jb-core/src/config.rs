//! Configuration types and loading
//!
//! All settings come from environment variables, with `.env` support handled
//! by the server binary.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Document store configuration
    pub store: StoreSettings,

    /// Server configuration
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
    /// MongoDB connection URI
    pub uri: String,
    /// Database name
    pub database: String,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Server selection timeout in seconds
    pub selection_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreSettings {
                uri: "mongodb://localhost:27017".to_string(),
                database: "jobboard".to_string(),
                connect_timeout_secs: 10,
                selection_timeout_secs: 5,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(uri) = std::env::var("MONGODB_URI") {
            config.store.uri = uri;
        }
        if let Ok(db) = std::env::var("MONGODB_DATABASE") {
            config.store.database = db;
        }
        if let Ok(timeout) = std::env::var("STORE_CONNECT_TIMEOUT") {
            config.store.connect_timeout_secs =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "STORE_CONNECT_TIMEOUT".to_string(),
                    message: format!("not a number of seconds: {}", timeout),
                })?;
        }
        if let Ok(timeout) = std::env::var("STORE_SELECTION_TIMEOUT") {
            config.store.selection_timeout_secs =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "STORE_SELECTION_TIMEOUT".to_string(),
                    message: format!("not a number of seconds: {}", timeout),
                })?;
        }

        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("not a port number: {}", port),
            })?;
        }

        Ok(config)
    }

    /// Get the server address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        use std::net::SocketAddr;
        let ip: std::net::IpAddr = self.server.host.parse().unwrap_or([0, 0, 0, 0].into());
        SocketAddr::new(ip, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.database, "jobboard");
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig::default();
        let addr = config.server_addr();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_server_addr_bad_host_falls_back() {
        let mut config = AppConfig::default();
        config.server.host = "not-an-ip".to_string();
        let addr = config.server_addr();
        assert!(addr.ip().is_unspecified());
    }
}
