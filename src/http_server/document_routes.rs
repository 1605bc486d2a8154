//! Document HTTP Routes
//!
//! Ingestion, lookup and listing of document metadata.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::model::{DocumentRecord, IngestionResponse};

pub fn document_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/documents",
            get(list_documents_handler).post(ingest_document_handler),
        )
        .route("/documents/:document_id", get(get_document_handler))
        .with_state(state)
}

async fn ingest_document_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DocumentRecord>, JsonRejection>,
) -> ApiResult<Json<IngestionResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;
    let response = state.registry.register(payload)?;
    Ok(Json(response))
}

async fn get_document_handler(
    State(state): State<Arc<AppState>>,
    Path(document_id): Path<String>,
) -> ApiResult<Json<DocumentRecord>> {
    state
        .registry
        .get(&document_id)?
        .map(Json)
        .ok_or(ApiError::DocumentNotFound)
}

async fn list_documents_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<DocumentRecord>>> {
    Ok(Json(state.registry.list()?))
}
