use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates the PostgreSQL pool backing the prompt history store.
/// History traffic is light (one detached insert per generation plus list
/// reads), so a small pool is plenty.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to the history store...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    info!("History store pool ready");
    Ok(pool)
}
