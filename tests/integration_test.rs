//! Integration tests for the Toolbelt tool service.
//!
//! These tests drive the exact router the binary serves, in process,
//! without binding a socket.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use toolbelt::{build_router, registry, AppState, Config};
use tower::ServiceExt;

/// Router backed by a config whose landing page does not exist.
fn test_app() -> Router {
    app_with_landing_page(PathBuf::from("/nonexistent/landing.html"))
}

fn app_with_landing_page(landing_page: PathBuf) -> Router {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 8000,
        landing_page,
        shutdown_timeout_secs: 0,
    };
    build_router(Arc::new(AppState::new(config)))
}

/// Helper to make a GET request and parse the JSON body.
async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

// ============================================================================
// Discovery Endpoints
// ============================================================================

#[tokio::test]
async fn test_root_without_landing_page_returns_json_summary() {
    let (status, body) = get_json(test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Toolbelt");
    assert_eq!(body["mcp_config"], "/mcp-config");
    assert_eq!(body["available_tools"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_root_serves_landing_page_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("index.html");
    std::fs::write(&page, "<html><body>Toolbelt</body></html>").unwrap();

    let app = app_with_landing_page(page);
    let req = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body.as_ref(), b"<html><body>Toolbelt</body></html>");
}

#[tokio::test]
async fn test_api_info_summary() {
    let (status, body) = get_json(test_app(), "/api/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    let tools = body["available_tools"].as_array().unwrap();
    assert!(tools.contains(&json!("/tools/sqrt")));
}

#[tokio::test]
async fn test_manifest_lists_exactly_six_tools() {
    let (status, body) = get_json(test_app(), "/mcp-config").await;

    assert_eq!(status, StatusCode::OK);
    let tools = body["mcpServers"]["toolbelt"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["hello", "add", "multiply", "temp-convert", "analyze-text", "sqrt"]
    );
    for tool in tools {
        assert!(!tool["endpoint"].as_str().unwrap().is_empty());
        assert!(!tool["description"].as_str().unwrap().is_empty());
    }
    assert_eq!(
        body["mcpServers"]["toolbelt"]["url"],
        "http://127.0.0.1:8000"
    );
}

#[tokio::test]
async fn test_every_manifest_endpoint_has_a_live_route() {
    // The registry invariant: no descriptor may point at a dead route.
    // A parameterless GET may be rejected (422) but never unrouted (404).
    for tool in registry::descriptors() {
        let (status, _) = get_json(test_app(), &tool.endpoint).await;
        assert_ne!(
            status,
            StatusCode::NOT_FOUND,
            "manifest endpoint {} has no route",
            tool.endpoint
        );
    }
}

// ============================================================================
// Tool Endpoints
// ============================================================================

#[tokio::test]
async fn test_hello_defaults_to_student() {
    let (status, body) = get_json(test_app(), "/tools/hello").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Student"));
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn test_hello_echoes_name() {
    let (status, body) = get_json(test_app(), "/tools/hello?name=Khadija").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Khadija"));
}

#[tokio::test]
async fn test_add_scenario() {
    let (status, body) = get_json(test_app(), "/tools/add?a=10&b=20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"operation": "addition", "a": 10, "b": 20, "result": 30})
    );
}

#[tokio::test]
async fn test_add_negative_numbers() {
    let (status, body) = get_json(test_app(), "/tools/add?a=-5&b=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], -2);
}

#[tokio::test]
async fn test_multiply_floats() {
    let (status, body) = get_json(test_app(), "/tools/multiply?a=2.5&b=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "multiplication");
    assert_eq!(body["result"], 10.0);
}

#[tokio::test]
async fn test_temp_convert_scenario() {
    let (status, body) = get_json(test_app(), "/tools/temp-convert?celsius=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["celsius"], 0.0);
    assert_eq!(body["fahrenheit"], 32.0);
    assert_eq!(body["kelvin"], 273.15);
}

#[tokio::test]
async fn test_analyze_text_counts() {
    let (status, body) = get_json(test_app(), "/tools/analyze-text?text=Hello%20World%20123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Hello World 123");
    assert_eq!(body["character_count"], 15);
    assert_eq!(body["word_count"], 3);
    assert_eq!(body["uppercase_count"], 2);
    assert_eq!(body["lowercase_count"], 8);
    assert_eq!(body["digit_count"], 3);
}

#[tokio::test]
async fn test_sqrt_positive() {
    let (status, body) = get_json(test_app(), "/tools/sqrt?number=16").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 16.0);
    assert_eq!(body["square_root"], 4.0);
}

#[tokio::test]
async fn test_sqrt_negative_scenario() {
    // Domain error: HTTP 200 with an error payload, no square_root field.
    let (status, body) = get_json(test_app(), "/tools/sqrt?number=-4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "Cannot calculate square root of negative number");
    assert!(body.get("square_root").is_none());
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_add_rejects_non_integer() {
    let (status, body) = get_json(test_app(), "/tools/add?a=x&b=2").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "a");
    assert_eq!(body["code"], 422);
    assert!(body["error"].as_str().unwrap().contains("integer"));
}

#[tokio::test]
async fn test_temp_convert_missing_parameter() {
    let (status, body) = get_json(test_app(), "/tools/temp-convert").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "celsius");
    assert!(body["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn test_sqrt_rejects_non_numeric() {
    let (status, body) = get_json(test_app(), "/tools/sqrt?number=abc").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "number");
}

#[tokio::test]
async fn test_analyze_text_requires_text() {
    let (status, body) = get_json(test_app(), "/tools/analyze-text").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "text");
}
