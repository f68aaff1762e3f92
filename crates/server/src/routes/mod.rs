pub mod fortunes;
pub mod stats;

use crate::AppState;
use axum::{routing::post, Router};
use fortune_shared::constants::{CREATE_PATH, PICK_PATH, STATS_PATH};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(PICK_PATH, post(fortunes::pick))
        .route(CREATE_PATH, post(fortunes::create))
        .route(STATS_PATH, post(stats::get_stats))
        .with_state(state)
}

/// Logs a rejected request body and maps it to a bare 400.
pub(crate) fn bad_request(reason: impl std::fmt::Display) -> axum::http::StatusCode {
    tracing::debug!("Rejected request: {}", reason);
    axum::http::StatusCode::BAD_REQUEST
}
