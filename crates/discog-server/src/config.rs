//! Server configuration read from environment variables.
//!
//! - `DISCOG_DB_PATH`: SQLite catalog file path (default: "discog.db")
//! - `DISCOG_HOST`: listen address (default: "0.0.0.0")
//! - `DISCOG_PORT`: listen port (default: "3000")

use thiserror::Error;

pub const DEFAULT_DB_PATH: &str = "discog.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            db_path: DEFAULT_DB_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = ServerConfig::default();

        if let Some(db_path) = get("DISCOG_DB_PATH") {
            config.db_path = db_path;
        }
        if let Some(host) = get("DISCOG_HOST") {
            config.host = host;
        }
        if let Some(port) = get("DISCOG_PORT") {
            config.port = port.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: "DISCOG_PORT",
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }

    /// Address string for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
