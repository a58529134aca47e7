use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use super::Config;

pub async fn create_pool(database_url: &str, config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .test_before_acquire(true)
        .connect(database_url)
        .await?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Database connection validation failed: {}", e))?;

    Ok(pool)
}

/// Creates the orders table if it does not exist yet. `seq` records
/// insertion order for listing.
pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS orders (
            seq            BIGSERIAL,
            id             UUID PRIMARY KEY,
            product_name   TEXT NOT NULL,
            distance       DOUBLE PRECISION NOT NULL,
            weight         DOUBLE PRECISION NOT NULL,
            vehicle_type   TEXT NOT NULL,
            packaging_type TEXT NOT NULL,
            co2_value      DOUBLE PRECISION NOT NULL,
            eco_score      INTEGER NOT NULL,
            eco_badge      TEXT NOT NULL,
            created_at     TIMESTAMPTZ NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS orders_seq_idx ON orders (seq)")
        .execute(pool)
        .await?;

    tracing::info!("orders schema ready");
    Ok(())
}
