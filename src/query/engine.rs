//! # Query Engine
//!
//! Full scan of the registry on every call: filter, score, rank, cap.
//! There is no index and no caching.

use std::sync::Arc;
use std::time::Instant;

use super::filters::matches_filters;
use super::scoring::{normalize_query, round_score, score_document, searchable_text};
use crate::model::{DocumentRecord, QueryRequest, QueryResponse, QueryResultSnippet};
use crate::observability::{Event, Logger};
use crate::registry::{DocumentRegistry, RegistryResult};

/// Answer returned when nothing qualifies
pub const NO_MATCH_ANSWER: &str = "No documents matched your query. Try adjusting the query text or filters once documents have been processed.";

const ANSWER_HEADER: &str = "Found the following documents matching your request:";
const SECTION_HEADING: &str = "Metadata";

pub struct QueryEngine {
    registry: Arc<DocumentRegistry>,
}

impl QueryEngine {
    pub fn new(registry: Arc<DocumentRegistry>) -> Self {
        Self { registry }
    }

    /// Rank stored documents against `request`.
    ///
    /// `request` is expected to have passed [`QueryRequest::validate`].
    pub fn answer(&self, request: &QueryRequest) -> RegistryResult<QueryResponse> {
        let started = Instant::now();

        let documents = self.registry.list()?;
        let matches = rank(documents, request);

        let (answer, citations) = if matches.is_empty() {
            (NO_MATCH_ANSWER.to_string(), Vec::new())
        } else {
            render(&matches)
        };

        let latency_ms = (started.elapsed().as_millis() as u64).max(1);

        Logger::event(
            Event::QueryAnswered,
            &[
                ("citations", citations.len().to_string().as_str()),
                ("latency_ms", latency_ms.to_string().as_str()),
            ],
        );

        Ok(QueryResponse {
            answer,
            citations,
            latency_ms,
        })
    }
}

/// Filter, score and sort `documents`, keeping at most `max_results`.
/// Ties keep store order.
pub fn rank(documents: Vec<DocumentRecord>, request: &QueryRequest) -> Vec<(DocumentRecord, f64)> {
    let query = normalize_query(&request.query);

    let mut matches: Vec<(DocumentRecord, f64)> = documents
        .into_iter()
        .filter(|doc| matches_filters(doc, request.document_filters.as_ref()))
        .filter_map(|doc| {
            let score = score_document(&query, &searchable_text(&doc))?;
            Some((doc, score))
        })
        .collect();

    matches.sort_by(|a, b| b.1.total_cmp(&a.1));
    matches.truncate(request.max_results);
    matches
}

fn render(matches: &[(DocumentRecord, f64)]) -> (String, Vec<QueryResultSnippet>) {
    let mut lines = vec![ANSWER_HEADER.to_string()];
    let mut citations = Vec::with_capacity(matches.len());

    for (doc, score) in matches {
        let period = doc
            .reporting_period
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unspecified period".to_string());
        lines.push(format!("- {} ({}) for {}", doc.product, doc.document_type, period));

        citations.push(QueryResultSnippet {
            document_id: doc
                .document_id
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            section_heading: Some(SECTION_HEADING.to_string()),
            page: None,
            excerpt: format!(
                "Issuer: {}. Product: {}. Filename: {}.",
                doc.issuer, doc.product, doc.filename
            ),
            score: round_score(*score),
        });
    }

    (lines.join("\n"), citations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Arc<DocumentRegistry>, QueryEngine) {
        let dir = TempDir::new().unwrap();
        let registry = Arc::new(DocumentRegistry::open(dir.path().join("documents.json")).unwrap());
        let engine = QueryEngine::new(Arc::clone(&registry));
        (dir, registry, engine)
    }

    fn doc(issuer: &str, product: &str, filename: &str) -> DocumentRecord {
        DocumentRecord::new("t1", issuer, product, "factsheet", filename)
    }

    #[test]
    fn test_empty_store_returns_no_match() {
        let (_dir, _registry, engine) = setup();
        let response = engine.answer(&QueryRequest::new("Fund B")).unwrap();
        assert_eq!(response.answer, NO_MATCH_ANSWER);
        assert!(response.citations.is_empty());
        assert!(response.latency_ms >= 1);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let (_dir, registry, engine) = setup();
        registry.register(doc("Acme", "Fund A", "a.pdf")).unwrap();
        registry.register(doc("Beta", "Fund C", "c.pdf")).unwrap();

        let response = engine.answer(&QueryRequest::new("")).unwrap();
        assert_eq!(response.citations.len(), 2);
        assert!(response.citations.iter().all(|c| c.score == 0.1));
    }

    #[test]
    fn test_answer_format() {
        let (_dir, registry, engine) = setup();
        registry
            .register(
                doc("Acme", "Fund A", "a.pdf")
                    .with_id("doc-a")
                    .with_reporting_period(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()),
            )
            .unwrap();
        registry.register(doc("Acme", "Fund C", "c.pdf").with_id("doc-c")).unwrap();

        let response = engine.answer(&QueryRequest::new("acme")).unwrap();
        assert_eq!(
            response.answer,
            "Found the following documents matching your request:\n\
             - Fund A (factsheet) for 2023-12-31\n\
             - Fund C (factsheet) for unspecified period"
        );

        let citation = &response.citations[0];
        assert_eq!(citation.document_id, "doc-a");
        assert_eq!(citation.section_heading.as_deref(), Some("Metadata"));
        assert_eq!(citation.page, None);
        assert_eq!(citation.excerpt, "Issuer: Acme. Product: Fund A. Filename: a.pdf.");
        assert_eq!(citation.score, 1.0);
    }

    #[test]
    fn test_ranks_by_overlap() {
        let (_dir, registry, engine) = setup();
        registry.register(doc("Acme", "Income", "x.pdf").with_id("a")).unwrap();
        registry.register(doc("Acme", "Growth Income", "y.pdf").with_id("b")).unwrap();

        let response = engine.answer(&QueryRequest::new("growth income")).unwrap();
        let ids: Vec<_> = response.citations.iter().map(|c| c.document_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(response.citations[0].score, 1.0);
        assert_eq!(response.citations[1].score, 0.5);
    }

    #[test]
    fn test_filters_apply_before_scoring() {
        let (_dir, registry, engine) = setup();
        registry.register(doc("Acme", "Fund A", "a.pdf").with_id("a")).unwrap();
        registry.register(doc("Beta", "Fund A", "b.pdf").with_id("b")).unwrap();

        let request = QueryRequest::new("fund").with_filter("issuer", "BETA");
        let response = engine.answer(&request).unwrap();
        assert_eq!(response.citations.len(), 1);
        assert_eq!(response.citations[0].document_id, "b");
    }

    #[test]
    fn test_max_results_caps_output() {
        let (_dir, registry, engine) = setup();
        for i in 0..4 {
            registry
                .register(doc("Acme", "Fund", &format!("{}.pdf", i)))
                .unwrap();
        }
        let response = engine
            .answer(&QueryRequest::new("fund").with_max_results(3))
            .unwrap();
        assert_eq!(response.citations.len(), 3);
    }

    #[test]
    fn test_rank_keeps_store_order_on_ties() {
        let docs = vec![
            doc("Acme", "Fund", "1.pdf").with_id("1"),
            doc("Acme", "Fund", "2.pdf").with_id("2"),
            doc("Acme", "Fund", "3.pdf").with_id("3"),
        ];
        let ranked = rank(docs, &QueryRequest::new("fund"));
        let ids: Vec<_> = ranked
            .iter()
            .map(|(d, _)| d.document_id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
