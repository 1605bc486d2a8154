//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::model::ValidationError;
use crate::registry::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration could not be loaded or is invalid
    ConfigError,
    /// stdin/stdout failure or malformed JSON input
    IoError,
    /// Input parsed but failed validation
    InvalidInput,
    /// No document under the requested id
    NotFound,
    /// Document store failure
    StoreError,
    /// Server could not start
    BootFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "DOCINTEL_CLI_CONFIG_ERROR",
            Self::IoError => "DOCINTEL_CLI_IO_ERROR",
            Self::InvalidInput => "DOCINTEL_CLI_INVALID_INPUT",
            Self::NotFound => "DOCINTEL_CLI_NOT_FOUND",
            Self::StoreError => "DOCINTEL_CLI_STORE_ERROR",
            Self::BootFailed => "DOCINTEL_CLI_BOOT_FAILED",
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn not_found(document_id: &str) -> Self {
        Self::new(
            CliErrorCode::NotFound,
            format!("Document not found: {}", document_id),
        )
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(CliErrorCode::ConfigError, e.to_string())
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        Self::new(CliErrorCode::InvalidInput, e.to_string())
    }
}

impl From<RegistryError> for CliError {
    fn from(e: RegistryError) -> Self {
        Self::new(CliErrorCode::StoreError, e.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::not_found("doc-9");
        assert_eq!(err.code(), &CliErrorCode::NotFound);
        assert_eq!(
            err.to_string(),
            "DOCINTEL_CLI_NOT_FOUND: Document not found: doc-9"
        );
    }

    #[test]
    fn test_validation_maps_to_invalid_input() {
        let err = CliError::from(ValidationError::new("max_results", "out of range"));
        assert_eq!(err.code_str(), "DOCINTEL_CLI_INVALID_INPUT");
    }
}
