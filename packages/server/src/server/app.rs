//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    analyze_writing_handler, generate_sample_handler, health_handler, score_essay_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub server_deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// Dependencies come in from outside so tests can inject mocks and
/// drive the full router without a network or an API key.
pub fn build_app(server_deps: Arc<ServerDeps>) -> Router {
    let app_state = AppState { server_deps };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/generate_sample", post(generate_sample_handler))
        .route("/score_essay", post(score_essay_handler))
        .route("/analyze_writing", post(analyze_writing_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
