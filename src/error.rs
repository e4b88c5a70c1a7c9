use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Server-side failures. Validation is the only rejection path the service
/// has; everything else a tool can report is a payload-level domain result.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid parameter '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    code: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, field, message) = match &self {
            AppError::Validation { field, reason } => {
                tracing::warn!(field = %field, error = %reason, "Validation error");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Some(field.clone()),
                    reason.clone(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, None, msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            field,
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Client-side failures for `ToolClient`. Each variant carries enough
/// context to print a useful diagnostic without consulting the server.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Cannot connect to tool server at {url}\n  Hint: start it with `toolbelt` (or point TOOLBELT_URL at a running instance)")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unknown tool '{name}'. Available tools: {}", .known.join(", "))]
    UnknownTool { name: String, known: Vec<String> },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed manifest: {0}")]
    Manifest(String),
}
