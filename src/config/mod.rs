//! # Configuration
//!
//! Settings resolve in three layers:
//! 1. Built-in defaults
//! 2. An optional JSON config file
//! 3. `APP_`-prefixed environment variables
//!
//! The result is validated once and is read-only afterwards.

mod errors;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

pub use errors::{ConfigError, ConfigResult};

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "APP_";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Human-readable name exposed via the health endpoint
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Environment label used in logs
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Reported by the health endpoint; no processing pipeline reads it yet
    #[serde(default)]
    pub enable_mock_processing: bool,

    /// Location of the persisted document store
    #[serde(default = "default_document_store_path")]
    pub document_store_path: PathBuf,

    /// Minimum log severity: trace, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_app_name() -> String {
    "Investor Document Intelligence API".to_string()
}

fn default_environment() -> String {
    "local".to_string()
}

fn default_document_store_path() -> PathBuf {
    PathBuf::from("data").join("documents.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            environment: default_environment(),
            enable_mock_processing: false,
            document_store_path: default_document_store_path(),
            log_level: default_log_level(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Settings {
    /// Defaults, then `path` if given, then the process environment
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_env(std::env::vars())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `APP_*` overrides. Variables without the prefix are ignored,
    /// as are unknown names after it.
    pub fn apply_env<I>(&mut self, vars: I) -> ConfigResult<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match name.to_ascii_uppercase().as_str() {
                "APP_NAME" => self.app_name = value,
                "ENVIRONMENT" => self.environment = value,
                "ENABLE_MOCK_PROCESSING" => {
                    self.enable_mock_processing = parse_bool(&key, &value)?;
                }
                "DOCUMENT_STORE_PATH" => self.document_store_path = PathBuf::from(value),
                "LOG_LEVEL" => self.log_level = value,
                "HTTP_HOST" => self.http.host = value,
                "HTTP_PORT" => {
                    self.http.port = value
                        .parse()
                        .map_err(|_| ConfigError::invalid(&key, format!("'{}' is not a port", value)))?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.document_store_path.as_os_str().is_empty() {
            return Err(ConfigError::invalid(
                "document_store_path",
                "must not be empty",
            ));
        }
        self.severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> ConfigResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| ConfigError::invalid("log_level", e))
    }

    /// Serializable summary of the settings exposed by the health endpoint
    pub fn summary(&self) -> Value {
        json!({
            "app_name": self.app_name,
            "environment": self.environment,
            "enable_mock_processing": self.enable_mock_processing,
            "document_store_path": self.document_store_path.display().to_string(),
        })
    }
}

/// Accepts the common boolean spellings
fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "y" | "t" => Ok(true),
        "0" | "false" | "no" | "off" | "n" | "f" => Ok(false),
        other => Err(ConfigError::invalid(key, format!("'{}' is not a boolean", other))),
    }
}
