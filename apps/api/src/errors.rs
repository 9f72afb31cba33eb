use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::resolver::ResolveError;
use crate::llm_client::LlmError;

/// Whether 500 responses carry full debug detail (source chains) in addition
/// to the error message. Off by default so internals never leak to clients in
/// production; set once from config at startup.
static EXPOSE_DETAIL: OnceLock<bool> = OnceLock::new();

pub fn set_expose_detail(enabled: bool) {
    // Second call is a no-op; only main sets this.
    let _ = EXPOSE_DETAIL.set(enabled);
}

fn expose_detail() -> bool {
    *EXPOSE_DETAIL.get().unwrap_or(&false)
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The client-visible body is always a flat `{"error": <string>}`. 400s use
/// one of two fixed strings and never carry internal detail; 500s always carry
/// *some* diagnostic text, produced by matching over this closed taxonomy
/// rather than inspecting arbitrary thrown values.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is absent or empty. Also covers malformed request
    /// bodies — structural parse failure and missing-field failure are not
    /// distinguished on the wire.
    #[error("Missing required fields")]
    MissingFields,

    /// The (contentType, tone) pair failed validation against the
    /// instruction table.
    #[error("Invalid content type or tone")]
    InvalidSelection(#[from] ResolveError),

    /// The generation provider call failed (network, quota, malformed
    /// response).
    #[error("Generation provider error: {0}")]
    Provider(#[from] LlmError),

    /// History store error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that went wrong during request handling.
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Missing required fields".to_string(),
            ),
            AppError::InvalidSelection(e) => {
                tracing::debug!("rejected selection: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid content type or tone".to_string(),
                )
            }
            AppError::Provider(e) => {
                tracing::error!("provider error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, diagnostic_text(e))
            }
            AppError::Database(e) => {
                tracing::error!("database error: {e}");
                let message = if expose_detail() {
                    e.to_string()
                } else {
                    "A database error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
                let message = if expose_detail() {
                    format!("{e:#}")
                } else {
                    e.to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Best-effort diagnostic string for a provider failure. The message text is
/// always returned; the full debug rendering (with error sources) is appended
/// only when EXPOSE_ERROR_DETAIL is set.
fn diagnostic_text(e: &LlmError) -> String {
    if expose_detail() {
        format!("{e}\n{e:?}")
    } else {
        e.to_string()
    }
}
