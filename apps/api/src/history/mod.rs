//! Per-user prompt history.
//!
//! Every successful generation is appended here, keyed by the caller's user
//! id. The append is detached from the request that produced it: a storage
//! failure is logged and the generation response is unaffected.

pub mod handlers;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::generation::resolver::ComposedPrompt;

/// A stored generation, as persisted and as returned by the history API.
/// `prompt` is the user's raw input text, `generation` the provider output.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StoredPromptRow {
    pub id: Uuid,
    pub user_id: String,
    pub prompt: String,
    pub tone: String,
    pub category: String,
    pub generation: String,
    pub created_at: DateTime<Utc>,
}

/// Creates the prompts table if it does not exist. Called once at startup.
pub async fn ensure_schema(db: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS prompts (
            id UUID PRIMARY KEY,
            user_id TEXT NOT NULL,
            prompt TEXT NOT NULL,
            tone TEXT NOT NULL,
            category TEXT NOT NULL,
            generation TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_prompts_user_created
         ON prompts (user_id, created_at DESC)",
    )
    .execute(db)
    .await?;

    Ok(())
}

/// A history record ready for insertion. Field names fix the mapping so a
/// caller cannot transpose columns the way positional arguments would allow.
#[derive(Debug, Clone)]
pub struct NewPrompt {
    pub user_id: String,
    pub prompt: String,
    pub tone: String,
    pub category: String,
    pub generation: String,
}

impl NewPrompt {
    /// Builds a record from a finished generation. The user's raw input text
    /// becomes `prompt`, the provider output becomes `generation`; tone and
    /// category come from the validated pair the prompt was composed from.
    pub fn from_generation(
        user_id: String,
        input_text: String,
        composed: &ComposedPrompt,
        generated: String,
    ) -> Self {
        Self {
            user_id,
            prompt: input_text,
            tone: composed.tone.as_str().to_string(),
            category: composed.category.as_str().to_string(),
            generation: generated,
        }
    }
}

/// Appends one history row.
pub async fn append(db: &PgPool, record: &NewPrompt) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO prompts (id, user_id, prompt, tone, category, generation)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(Uuid::new_v4())
    .bind(&record.user_id)
    .bind(&record.prompt)
    .bind(&record.tone)
    .bind(&record.category)
    .bind(&record.generation)
    .execute(db)
    .await?;
    Ok(())
}

/// Fire-and-forget append: spawns the insert so the generation response is
/// never held up or failed by the history store.
pub fn append_detached(db: PgPool, record: NewPrompt) {
    tokio::spawn(async move {
        if let Err(e) = append(&db, &record).await {
            warn!("history append failed for user {}: {e}", record.user_id);
        }
    });
}

/// Returns a user's history, newest first.
pub async fn list_for_user(
    db: &PgPool,
    user_id: &str,
    limit: i64,
) -> Result<Vec<StoredPromptRow>, sqlx::Error> {
    sqlx::query_as::<_, StoredPromptRow>(
        "SELECT * FROM prompts WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::resolver::resolve;

    #[test]
    fn test_record_maps_input_to_prompt_and_output_to_generation() {
        let composed = resolve("rephrase", "casual", "hey can u send the file").unwrap();
        let record = NewPrompt::from_generation(
            "u1".to_string(),
            "hey can u send the file".to_string(),
            &composed,
            "Hey, could you send the file over?".to_string(),
        );

        assert_eq!(record.user_id, "u1");
        // The raw input is stored under `prompt`, never the composed
        // instruction text or the provider output.
        assert_eq!(record.prompt, "hey can u send the file");
        assert_eq!(record.generation, "Hey, could you send the file over?");
        assert_ne!(record.prompt, record.generation);
    }

    #[test]
    fn test_record_takes_tone_and_category_from_validated_pair() {
        let composed = resolve("instagram", "aesthetic", "sunset walk").unwrap();
        let record = NewPrompt::from_generation(
            "u2".to_string(),
            "sunset walk".to_string(),
            &composed,
            "golden hour, quiet streets".to_string(),
        );

        assert_eq!(record.tone, "aesthetic");
        assert_eq!(record.category, "instagram");
    }
}
