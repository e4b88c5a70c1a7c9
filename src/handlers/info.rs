//! Discovery endpoints: landing page, service summary, and the manifest.

use crate::registry;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct ApiInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub available_tools: Vec<String>,
    pub documentation: &'static str,
    pub mcp_config: &'static str,
}

fn api_info() -> ApiInfo {
    ApiInfo {
        name: "Toolbelt",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        available_tools: registry::descriptors()
            .into_iter()
            .map(|tool| tool.endpoint)
            .collect(),
        documentation: "/api/info",
        mcp_config: "/mcp-config",
    }
}

/// GET / - Static landing page if the configured file is readable,
/// else the JSON summary.
pub async fn root_handler(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read_to_string(&state.config.landing_page).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            tracing::debug!(
                path = %state.config.landing_page.display(),
                error = %err,
                "No landing page, serving JSON summary"
            );
            Json(api_info()).into_response()
        }
    }
}

/// GET /api/info - Service summary, always JSON.
pub async fn info_handler() -> Json<ApiInfo> {
    Json(api_info())
}

/// GET /mcp-config - The machine-readable tool manifest.
pub async fn manifest_handler(State(state): State<Arc<AppState>>) -> Json<registry::Manifest> {
    Json(registry::manifest(&state.config.base_url()))
}
