//! Naive overlap scoring
//!
//! A document qualifies for a non-empty query when the whole query appears
//! in its searchable text or any single token does. The reported score is
//! the fraction of query tokens found, floored at 0.05 and capped at 1.0.
//! Every document qualifies for an empty query with a score of 0.1.

use crate::model::DocumentRecord;

/// Score given to every document when the query is empty
pub const EMPTY_QUERY_SCORE: f64 = 0.1;

/// Lowest score a qualifying document reports for a non-empty query
pub const MIN_MATCH_SCORE: f64 = 0.05;

/// Lowercased, space-joined text the query is matched against.
///
/// Fields: issuer, product, document_type, language, source, filename and
/// the ISO reporting period. Empty and absent fields are skipped.
pub fn searchable_text(record: &DocumentRecord) -> String {
    let period = record.reporting_period.map(|d| d.to_string());
    let parts = [
        Some(record.issuer.as_str()),
        Some(record.product.as_str()),
        Some(record.document_type.as_str()),
        Some(record.language.as_str()),
        Some(record.source.as_str()),
        Some(record.filename.as_str()),
        period.as_deref(),
    ];

    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Trimmed, lowercased form of a raw query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Score `searchable` against an already-normalized query.
///
/// Returns `None` when the document does not qualify.
pub fn score_document(normalized_query: &str, searchable: &str) -> Option<f64> {
    if normalized_query.is_empty() {
        return Some(EMPTY_QUERY_SCORE);
    }

    let tokens: Vec<&str> = normalized_query.split_whitespace().collect();
    let found = tokens
        .iter()
        .filter(|token| searchable.contains(*token))
        .count();
    let overlap = found as f64 / tokens.len().max(1) as f64;

    if searchable.contains(normalized_query) || overlap > 0.0 {
        Some(overlap.clamp(MIN_MATCH_SCORE, 1.0))
    } else {
        None
    }
}

/// Round to two decimals.
///
/// Rounds the exact binary value, ties to even. Scaling by 100 first would
/// round values such as 3/40 (stored just below 0.075) the wrong way.
pub fn round_score(score: f64) -> f64 {
    format!("{:.2}", score).parse().unwrap_or(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(product: &str) -> DocumentRecord {
        DocumentRecord::new("t1", "Global Investments", product, "annual report", "fund-b-annual.pdf")
    }

    #[test]
    fn test_searchable_text_fields_and_order() {
        let text = searchable_text(
            &record("Fund B").with_reporting_period(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()),
        );
        assert_eq!(
            text,
            "global investments fund b annual report en upload fund-b-annual.pdf 2023-12-31"
        );
    }

    #[test]
    fn test_searchable_text_skips_empty_fields() {
        let text = searchable_text(&record("Fund B").with_language(""));
        assert_eq!(text, "global investments fund b annual report upload fund-b-annual.pdf");
    }

    #[test]
    fn test_empty_query_scores_floor() {
        assert_eq!(score_document("", "anything"), Some(EMPTY_QUERY_SCORE));
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_token_overlap_fraction() {
        let searchable = searchable_text(&record("Fund B"));
        assert_eq!(score_document("fund b", &searchable), Some(1.0));
        assert_eq!(score_document("fund zzz", &searchable), Some(0.5));
        assert_eq!(score_document("qqq zzz", &searchable), None);
    }

    #[test]
    fn test_tokens_match_as_substrings() {
        // "vest" is inside "investments"
        assert_eq!(score_document("vest", "global investments"), Some(1.0));
    }

    #[test]
    fn test_small_overlap_is_floored() {
        let query = (0..25).map(|i| format!("t{}", i)).collect::<Vec<_>>().join(" ");
        let score = score_document(&query, "t0").unwrap();
        // t0 is the only hit among 25 tokens: 0.04 raised to the floor
        assert_eq!(score, MIN_MATCH_SCORE);
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Fund B \n"), "fund b");
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(1.0 / 3.0), 0.33);
        assert_eq!(round_score(2.0 / 3.0), 0.67);
        assert_eq!(round_score(0.125), 0.12);
        assert_eq!(round_score(0.375), 0.38);
        assert_eq!(round_score(3.0 / 40.0), 0.07);
        assert_eq!(round_score(29.0 / 200.0), 0.14);
        assert_eq!(round_score(0.05), 0.05);
        assert_eq!(round_score(1.0), 1.0);
    }
}
