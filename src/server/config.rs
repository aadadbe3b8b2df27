//! Search server configuration
//!
//! Bind address and the optional access token required from clients.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Access token required in the `AccessToken` header; `None` disables
    /// the check.
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            access_token: None,
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(9090);
        assert_eq!(config.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 1234}"#).unwrap();
        assert_eq!(config.port, 1234);
        assert_eq!(config.host, "0.0.0.0");
    }
}
