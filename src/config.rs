//! Server configuration.

use std::net::SocketAddr;
use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Configuration for the hangman HTTP server.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds to.
    #[serde(default = "default_host")]
    host: String,

    /// Port the listener binds to.
    #[serde(default = "default_port")]
    port: u16,

    /// Path of the SQLite database file.
    #[serde(default = "default_db_path")]
    db_path: String,
}

#[instrument]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[instrument]
fn default_port() -> u16 {
    3000
}

#[instrument]
fn default_db_path() -> String {
    "hangman.db".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db_path: default_db_path(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        db_path: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(db_path) = db_path {
            self.db_path = db_path;
        }
        self
    }

    /// The socket address the server listens on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if host and port do not form a valid
    /// socket address.
    #[instrument(skip(self))]
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::new(format!("Invalid listen address: {}", e)))
    }
}

/// Failure loading or applying configuration, tagged with where it was
/// raised.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub message: String,
    /// Line that raised the error.
    pub line: u32,
    /// Source file that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a configuration error tagged with the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config: ServerConfig = toml::from_str("port = 8080").unwrap();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(*config.port(), 8080);
        assert_eq!(config.db_path(), "hangman.db");
    }

    #[test]
    fn test_overrides_beat_file_values() {
        let config = ServerConfig::default().with_overrides(None, Some(4000), None);
        assert_eq!(*config.port(), 4000);
        assert_eq!(config.host(), "127.0.0.1");
    }

    #[test]
    fn test_socket_addr_combines_host_and_port() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let config =
            ServerConfig::default().with_overrides(Some("not an ip".to_string()), None, None);
        assert!(config.socket_addr().is_err());
    }
}
