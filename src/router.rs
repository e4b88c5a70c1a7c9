//! Route table for the service.
//!
//! Kept in the library so integration tests drive the exact router the
//! binary serves, including the manifest/route agreement invariant.

use crate::handlers::{
    add_handler, analyze_text_handler, hello_handler, info_handler, manifest_handler,
    multiply_handler, root_handler, sqrt_handler, temp_convert_handler,
};
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the application router. Every endpoint in the manifest must have
/// a matching route here.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Discovery
        .route("/", get(root_handler))
        .route("/api/info", get(info_handler))
        .route("/mcp-config", get(manifest_handler))
        // Tools
        .route("/tools/hello", get(hello_handler))
        .route("/tools/add", get(add_handler))
        .route("/tools/multiply", get(multiply_handler))
        .route("/tools/temp-convert", get(temp_convert_handler))
        .route("/tools/analyze-text", get(analyze_text_handler))
        .route("/tools/sqrt", get(sqrt_handler))
        // Middleware
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        // State
        .with_state(state)
}
