//! Shared state handed to every route

use std::sync::Arc;

use crate::compliance::ComplianceService;
use crate::config::Settings;
use crate::query::QueryEngine;
use crate::registry::DocumentRegistry;

/// Built once at startup; handlers receive it as `Arc<AppState>`
pub struct AppState {
    pub settings: Settings,
    pub registry: Arc<DocumentRegistry>,
    pub query_engine: QueryEngine,
    pub compliance: ComplianceService,
}

impl AppState {
    pub fn new(settings: Settings, registry: Arc<DocumentRegistry>) -> Self {
        Self {
            settings,
            query_engine: QueryEngine::new(Arc::clone(&registry)),
            compliance: ComplianceService::new(Arc::clone(&registry)),
            registry,
        }
    }
}
