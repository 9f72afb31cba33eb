//! Axum route handler for the Generation API.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{PERSONA_SYSTEM, TEMPERATURE};
use crate::generation::resolver::resolve;
use crate::history;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub input_text: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub content_type: String,
    /// Present when the caller is signed in; enables history persistence.
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
}

/// POST /api/generate
///
/// Validate → resolve prompt → single provider call → respond. No partial
/// success: either generated content comes back or a structured error does.
/// The history write is detached and never affects the response.
pub async fn handle_generate(
    State(state): State<AppState>,
    request: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    // A body that does not decode is reported the same way as one with
    // missing fields.
    let Json(request) = request.map_err(|_| AppError::MissingFields)?;

    // Byte emptiness, no trimming — matches the resolver's verbatim handling
    // of input text.
    if request.input_text.is_empty() || request.tone.is_empty() || request.content_type.is_empty()
    {
        return Err(AppError::MissingFields);
    }

    let composed = resolve(&request.content_type, &request.tone, &request.input_text)?;

    let content = state
        .llm
        .generate(PERSONA_SYSTEM, &composed.text, TEMPERATURE)
        .await?;

    info!(
        category = composed.category.as_str(),
        tone = composed.tone.as_str(),
        "generation succeeded"
    );

    if let Some(user_id) = &request.user_id {
        let record = history::NewPrompt::from_generation(
            user_id.clone(),
            request.input_text.clone(),
            &composed,
            content.clone(),
        );
        history::append_detached(state.db.clone(), record);
    }

    Ok(Json(GenerateResponse { content }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> GenerateRequest {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_request_decodes_camel_case_fields() {
        let request = decode(
            r#"{"inputText": "hey", "tone": "casual", "contentType": "rephrase", "userId": "u1"}"#,
        );
        assert_eq!(request.input_text, "hey");
        assert_eq!(request.tone, "casual");
        assert_eq!(request.content_type, "rephrase");
        assert_eq!(request.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_absent_fields_default_to_empty() {
        // Missing fields decode to empty strings so the handler reports them
        // as "Missing required fields" instead of a decode error.
        let request = decode(r#"{"tone": "casual"}"#);
        assert!(request.input_text.is_empty());
        assert!(request.content_type.is_empty());
        assert!(request.user_id.is_none());
    }

    #[test]
    fn test_whitespace_only_input_is_accepted_as_present() {
        // Presence is byte emptiness; a whitespace-only string passes
        // validation and reaches the resolver untouched.
        let request = decode(r#"{"inputText": " ", "tone": "casual", "contentType": "rephrase"}"#);
        assert!(!request.input_text.is_empty());
    }

    fn test_state() -> AppState {
        // Lazy pool: no connection is made unless a query runs, and the
        // paths under test fail before touching the store or the provider.
        let db = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/tonaire_test")
            .expect("lazy pool");
        AppState {
            db,
            llm: crate::llm_client::LlmClient::new("test-key".to_string()),
        }
    }

    async fn extract_body(raw: &'static str) -> Result<Json<GenerateRequest>, JsonRejection> {
        use axum::extract::FromRequest;

        let request = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(raw))
            .unwrap();
        Json::<GenerateRequest>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_malformed_body_reports_missing_fields() {
        // A body that fails to decode is indistinguishable on the wire from
        // one with missing fields.
        let payload = extract_body("{not json").await;
        assert!(payload.is_err());

        let result = handle_generate(State(test_state()), payload).await;
        assert!(matches!(result, Err(AppError::MissingFields)));
    }

    #[tokio::test]
    async fn test_empty_field_reports_missing_fields() {
        let payload =
            extract_body(r#"{"inputText": "", "tone": "casual", "contentType": "rephrase"}"#)
                .await;
        assert!(payload.is_ok());

        let result = handle_generate(State(test_state()), payload).await;
        assert!(matches!(result, Err(AppError::MissingFields)));
    }

    #[tokio::test]
    async fn test_cross_category_tone_rejected_before_provider_call() {
        let payload = extract_body(
            r#"{"inputText": "got a promotion", "tone": "aesthetic", "contentType": "linkedin"}"#,
        )
        .await;

        let result = handle_generate(State(test_state()), payload).await;
        assert!(matches!(result, Err(AppError::InvalidSelection(_))));
    }
}
