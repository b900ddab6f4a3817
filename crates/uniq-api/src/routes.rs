//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, unikalize};
use crate::middleware::cors_layer;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    // Generated copies are retrievable straight from the output dir.
    let serve_output = ServeDir::new(&state.config.output_dir);

    Router::new()
        .route("/health", get(health))
        .route("/api/unikalize", post(unikalize))
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .nest_service("/output", serve_output)
        .layer(cors_layer(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
