//! # HTTP Server
//!
//! Combines every route set into one Axum router.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::document_routes::document_routes;
use super::health_routes::health_routes;
use super::query_routes::query_routes;
use super::state::AppState;
use crate::observability::{Event, Logger};

pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(state: Arc<AppState>) -> Self {
        let config = state.settings.http.clone();
        let router = Self::build_router(state, &config);
        Self { config, router }
    }

    fn build_router(state: Arc<AppState>, config: &HttpServerConfig) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(config.allowed_origins()))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes(Arc::clone(&state)))
            .merge(document_routes(Arc::clone(&state)))
            .merge(query_routes(state))
            .layer(cors)
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.resolve()?;
        let listener = TcpListener::bind(addr).await?;
        Logger::event(Event::ServerStart, &[("addr", addr.to_string().as_str())]);
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
