//! Query request and response types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::{ValidationError, ValidationResult};

/// Upper bound on `max_results`
pub const MAX_RESULTS_LIMIT: usize = 20;

/// A free-text question plus optional exact-match metadata filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,

    /// Field name -> expected value, compared case-insensitively
    #[serde(default)]
    pub document_filters: Option<BTreeMap<String, String>>,

    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    5
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            document_filters: None,
            max_results: default_max_results(),
        }
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.document_filters
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), value.into());
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if !(1..=MAX_RESULTS_LIMIT).contains(&self.max_results) {
            return Err(ValidationError::new(
                "max_results",
                format!("must be between 1 and {}", MAX_RESULTS_LIMIT),
            ));
        }
        Ok(())
    }
}

/// Citation returned alongside an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResultSnippet {
    pub document_id: String,
    pub section_heading: Option<String>,
    pub page: Option<u32>,
    pub excerpt: String,
    /// In [0.0, 1.0], rounded to two decimals
    pub score: f64,
}

/// Structured answer to a [`QueryRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub citations: Vec<QueryResultSnippet>,
    pub latency_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_max_results() {
        let request: QueryRequest = serde_json::from_value(json!({"query": "Fund B"})).unwrap();
        assert_eq!(request.max_results, 5);
        assert!(request.document_filters.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_max_results_bounds() {
        assert!(QueryRequest::new("x").with_max_results(1).validate().is_ok());
        assert!(QueryRequest::new("x").with_max_results(20).validate().is_ok());

        let err = QueryRequest::new("x").with_max_results(0).validate().unwrap_err();
        assert_eq!(err.field, "max_results");
        assert!(QueryRequest::new("x").with_max_results(21).validate().is_err());
    }

    #[test]
    fn test_with_filter_accumulates() {
        let request = QueryRequest::new("")
            .with_filter("issuer", "Acme")
            .with_filter("language", "en");
        let filters = request.document_filters.unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters["issuer"], "Acme");
    }
}
