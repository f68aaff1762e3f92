#![allow(dead_code)]

use axum::Router;
use fortune_server::{
    config::{Database, Settings},
    db, routes, AppState,
};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::sync::Arc;

/// Create an in-memory SQLite pool with schema applied.
pub async fn setup_test_db() -> AnyPool {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");

    db::apply_schema(&pool).await.unwrap();

    pool
}

/// Build a test Axum app with the given pool.
pub fn create_test_app(pool: AnyPool) -> Router {
    let state = Arc::new(AppState {
        db: pool,
        settings: Settings {
            host: "127.0.0.1".into(),
            port: 0,
            database: Database::Url("sqlite::memory:".into()),
            max_connections: 1,
        },
    });

    routes::build_router(state)
}

/// Insert a fortune directly, bypassing the handlers.
pub async fn insert_fortune(pool: &AnyPool, content: &str, author: &str, creator: &str) {
    sqlx::query("INSERT INTO messages (content, author, creator) VALUES ($1, $2, $3)")
        .bind(content)
        .bind(author)
        .bind(creator)
        .execute(pool)
        .await
        .unwrap();
}

/// Insert a visit with an explicit epoch-second timestamp.
pub async fn insert_visit(pool: &AnyPool, username: &str, visit_type: &str, created: i64) {
    sqlx::query("INSERT INTO visits (username, type, created) VALUES ($1, $2, $3)")
        .bind(username)
        .bind(visit_type)
        .bind(created)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_messages(pool: &AnyPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_visits(pool: &AnyPool, visit_type: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visits WHERE type = $1")
        .bind(visit_type)
        .fetch_one(pool)
        .await
        .unwrap()
}
