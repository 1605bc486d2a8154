//! # Registry Errors
//!
//! Storage failures propagate to the caller and fail the request.
//! Unparseable store content is not an error (it reads as an empty store).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("I/O error on document store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize document store: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RegistryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RegistryError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable error code for logs and CLI output
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::Io { .. } => "DOCINTEL_STORE_IO",
            RegistryError::Serialize(_) => "DOCINTEL_STORE_SERIALIZE",
        }
    }
}
