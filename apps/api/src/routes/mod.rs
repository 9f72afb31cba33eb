pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate;
use crate::history::handlers::handle_list_prompts;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handle_generate))
        .route("/api/prompts", get(handle_list_prompts))
        .with_state(state)
}
