//! API Module
//!
//! HTTP surface of the build relay.

pub mod build;
pub mod error;
pub mod ping;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use droidforge_github::CiBackend;

/// Shared state handed to every handler
pub struct AppState {
    pub backend: Arc<dyn CiBackend>,
    pub config: Config,
}

/// Create the main API router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Real project archives exceed axum's default 2 MB body cap.
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        // Liveness
        .route("/api/ping", get(ping::ping))
        // Build pipeline
        .route("/api/build-apk", post(build::build_apk))
        // Add state and middleware
        .layer(body_limit)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
