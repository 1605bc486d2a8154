//! # Domain Model
//!
//! Wire and domain types shared by the registry, the query engine and the
//! compliance evaluator.
//!
//! Every type here is a plain serde value. Inbound values are checked with
//! `validate()` before they reach the core; shape and type mismatches are
//! already rejected during deserialization.

mod alert;
mod document;
mod errors;
mod query;

pub use alert::{AlertSeverity, AlertStatus, ComplianceAlert, ComplianceAlertList};
pub use document::{DocumentRecord, DocumentSource, DocumentStatus, IngestionResponse};
pub use errors::{ValidationError, ValidationResult};
pub use query::{QueryRequest, QueryResponse, QueryResultSnippet, MAX_RESULTS_LIMIT};
