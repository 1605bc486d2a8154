//! Document metadata records and ingestion responses

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{ValidationError, ValidationResult};

/// Origin of a document within the ingestion ecosystem
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSource {
    #[default]
    Upload,
    Sftp,
    Email,
    Api,
}

impl DocumentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentSource::Upload => "upload",
            DocumentSource::Sftp => "sftp",
            DocumentSource::Email => "email",
            DocumentSource::Api => "api",
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing status reported for an accepted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Received,
    Processing,
    Processed,
    Error,
}

/// Metadata captured when a document enters the system.
///
/// This is both the ingestion payload and the record handed back by the
/// registry. `document_id` is absent on new uploads and always present on
/// records read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// System-assigned identifier; omitted for new uploads
    #[serde(default)]
    pub document_id: Option<String>,

    /// Tenant identifier for multi-tenant isolation
    pub tenant_id: String,

    /// Issuer or asset manager associated with the document
    pub issuer: String,

    /// Product or fund name the document describes
    pub product: String,

    /// Document category (factsheet, report, filing, ...)
    pub document_type: String,

    /// Reporting period represented in the document, if known
    #[serde(default)]
    pub reporting_period: Option<NaiveDate>,

    /// ISO language code of the document
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub source: DocumentSource,

    /// Version number for reprocessed documents
    #[serde(default = "default_version")]
    pub version: u32,

    /// Original filename for traceability
    pub filename: String,

    /// Optional pointer to the binary (pre-signed URL or connector link)
    #[serde(default)]
    pub content_url: Option<String>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_version() -> u32 {
    1
}

impl DocumentRecord {
    /// Build a record with the required fields and every default applied
    pub fn new(
        tenant_id: impl Into<String>,
        issuer: impl Into<String>,
        product: impl Into<String>,
        document_type: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            document_id: None,
            tenant_id: tenant_id.into(),
            issuer: issuer.into(),
            product: product.into(),
            document_type: document_type.into(),
            reporting_period: None,
            language: default_language(),
            source: DocumentSource::default(),
            version: default_version(),
            filename: filename.into(),
            content_url: None,
        }
    }

    pub fn with_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn with_reporting_period(mut self, period: NaiveDate) -> Self {
        self.reporting_period = Some(period);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_source(mut self, source: DocumentSource) -> Self {
        self.source = source;
        self
    }

    /// The caller-supplied identifier, treating an empty string as absent
    pub fn supplied_id(&self) -> Option<&str> {
        self.document_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Reject values the wire types cannot express on their own
    pub fn validate(&self) -> ValidationResult<()> {
        if self.version < 1 {
            return Err(ValidationError::new("version", "must be a positive integer"));
        }

        if let Some(url) = &self.content_url {
            if !is_http_url(url) {
                return Err(ValidationError::new(
                    "content_url",
                    format!("'{}' is not a valid http(s) URL", url),
                ));
            }
        }

        Ok(())
    }
}

/// Absolute http/https URL with a non-empty host
fn is_http_url(url: &str) -> bool {
    if url.chars().any(char::is_whitespace) {
        return false;
    }

    let lower = url.to_ascii_lowercase();
    let rest = match lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host_port = authority.rsplit('@').next().unwrap_or("");
    let host = match host_port.strip_prefix('[') {
        Some(v6) => v6.split(']').next().unwrap_or(""),
        None => host_port.split(':').next().unwrap_or(""),
    };

    !host.is_empty()
}

/// Response returned once a document is accepted for processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionResponse {
    pub document_id: String,
    pub status: DocumentStatus,
    pub received_at: DateTime<Utc>,
}
