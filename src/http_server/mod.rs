//! # HTTP Server Module
//!
//! Thin JSON adapter over the registry, query engine and compliance service.
//!
//! # Endpoints
//!
//! - `GET /health` - Settings summary and status
//! - `POST /documents` - Register document metadata
//! - `GET /documents` - List registered documents
//! - `GET /documents/:document_id` - Fetch one document
//! - `POST /query` - Keyword query over metadata
//! - `GET /alerts` - Compliance alerts

pub mod config;
mod document_routes;
mod errors;
mod health_routes;
mod query_routes;
pub mod server;
mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
