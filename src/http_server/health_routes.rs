//! Health check route

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use super::state::AppState;

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Settings summary plus status and current timestamp
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut summary = state.settings.summary();
    if let Value::Object(map) = &mut summary {
        map.insert("status".to_string(), json!("ok"));
        map.insert("timestamp".to_string(), json!(Utc::now().to_rfc3339()));
    }
    Json(summary)
}
