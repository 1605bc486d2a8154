//! # Query
//!
//! Keyword search over registry contents.
//!
//! - **`filters`**: exact-match metadata filters over typed field accessors
//! - **`scoring`**: searchable text, token-overlap score, score rounding
//! - **`engine`**: full-scan ranking and answer rendering

mod engine;
mod filters;
mod scoring;

pub use engine::{rank, QueryEngine, NO_MATCH_ANSWER};
pub use filters::{field_value, matches_filters, DocumentField};
pub use scoring::{
    normalize_query, round_score, score_document, searchable_text, EMPTY_QUERY_SCORE,
    MIN_MATCH_SCORE,
};
