//! HTTP server: route table, middleware stack, and the serve loop.
//!
//! The router wires the resource CRUD handlers under `/api/resources`,
//! serves static files from the configured directory under `/public`, and
//! applies a permissive CORS layer to every response. Binding failures are
//! fatal; the caller logs them and exits non-zero.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::config::HttpConfig;
use crate::core::error::{Error, Result};
use crate::domains::resources::AppState;
use crate::domains::resources::handlers;

/// The HTTP server for the resource API.
pub struct HttpServer {
    config: HttpConfig,
}

impl HttpServer {
    /// Create a new server with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum application.
    pub fn app(&self, state: AppState) -> Router {
        // Permit any origin on every response, API and static alike.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_check))
            .route(
                "/api/resources",
                get(handlers::list_resources).post(handlers::create_resource),
            )
            .route(
                "/api/resources/{id}",
                get(handlers::get_resource)
                    .put(handlers::update_resource)
                    .delete(handlers::delete_resource),
            )
            .nest_service("/public", ServeDir::new(&self.config.static_dir))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind the listener and serve requests until the process is stopped.
    pub async fn run(self, state: AppState) -> Result<()> {
        let addr = self.address();
        let app = self.app(state);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::bind(&addr, e))?;

        info!("Ready - listening on {} (CORS enabled)", addr);
        info!("  → API:    /api/resources");
        info!("  → Static: /public/ from {}/", self.config.static_dir);

        axum::serve(listener, app).await.map_err(Error::Serve)?;

        Ok(())
    }
}

/// Root handler - static welcome message.
async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the API! Visit /api/resources for resources."
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
