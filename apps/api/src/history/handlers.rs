//! Axum route handler for the history API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::history::{list_for_user, StoredPromptRow};
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub user_id: String,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub prompts: Vec<StoredPromptRow>,
}

/// GET /api/prompts?user_id=<uid>[&limit=N]
///
/// Returns the user's past generations, newest first.
pub async fn handle_list_prompts(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    if query.user_id.is_empty() {
        return Err(AppError::MissingFields);
    }

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let prompts = list_for_user(&state.db, &query.user_id, limit).await?;

    Ok(Json(HistoryResponse { prompts }))
}
