//! Knowledge query and compliance alert routes

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::model::{ComplianceAlertList, QueryRequest, QueryResponse};
use crate::observability::{Event, Logger};

pub fn query_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/query", post(query_handler))
        .route("/alerts", get(list_alerts_handler))
        .with_state(state)
}

async fn query_handler(
    State(state): State<Arc<AppState>>,
    request: Result<Json<QueryRequest>, JsonRejection>,
) -> ApiResult<Json<QueryResponse>> {
    let request = request
        .map_err(ApiError::from)
        .and_then(|Json(request)| {
            request.validate()?;
            Ok(request)
        })
        .map_err(|e| {
            Logger::event(Event::QueryRejected, &[("reason", e.to_string().as_str())]);
            e
        })?;
    Ok(Json(state.query_engine.answer(&request)?))
}

async fn list_alerts_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ComplianceAlertList>> {
    Ok(Json(state.compliance.list_alerts()?))
}
