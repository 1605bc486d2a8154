//! # Validation Errors

use thiserror::Error;

/// Result type for inbound validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A field-level rejection of an inbound value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value for '{field}': {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
