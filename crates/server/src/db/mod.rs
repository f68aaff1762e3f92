pub mod fortunes;

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    apply_schema(&pool).await?;

    tracing::info!("Database initialized ({})", backend_name(database_url));
    Ok(pool)
}

/// Creates the `messages` and `visits` tables if they are missing.
pub async fn apply_schema(pool: &AnyPool) -> Result<(), sqlx::Error> {
    let schema = include_str!("schema.sql");

    // Split by semicolons and execute each statement
    // (SQLx doesn't support multi-statement queries directly)
    for statement in schema.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }

    Ok(())
}

fn backend_name(database_url: &str) -> &str {
    database_url.split(':').next().unwrap_or("unknown")
}
