//! Bind address and CORS origins for the HTTP surface

use std::io;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `host:port` as a bindable address; the host must be an IP literal
    pub fn resolve(&self) -> io::Result<SocketAddr> {
        self.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.socket_addr(), e),
            )
        })
    }

    /// Configured origins that are valid header values. Others are dropped.
    pub fn allowed_origins(&self) -> Vec<HeaderValue> {
        self.cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_partial_json() {
        let config = HttpServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:8000");
        assert!(config.cors_origins.is_empty());

        let parsed: HttpServerConfig = serde_json::from_str(r#"{"port": 9100}"#).unwrap();
        assert_eq!(parsed, HttpServerConfig::with_port(9100));
    }

    #[test]
    fn test_resolve() {
        let addr = HttpServerConfig::with_port(8080).resolve().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());

        let named = HttpServerConfig {
            host: "localhost".to_string(),
            ..HttpServerConfig::default()
        };
        assert_eq!(
            named.resolve().unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_invalid_origins_dropped() {
        let config = HttpServerConfig {
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "bad\norigin".to_string(),
            ],
            ..HttpServerConfig::default()
        };
        assert_eq!(
            config.allowed_origins(),
            vec![HeaderValue::from_static("http://localhost:5173")]
        );
    }
}
