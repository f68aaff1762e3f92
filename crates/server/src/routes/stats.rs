use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fortune_shared::api::StatsRequest;
use fortune_shared::validation::validate_request_username;
use std::sync::Arc;

use super::bad_request;
use crate::db;
use crate::AppState;

/// POST /stats
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    body: Result<Json<StatsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, StatusCode> {
    let Json(req) = body.map_err(bad_request)?;
    validate_request_username(&req.username).map_err(bad_request)?;

    let today = db::fortunes::day_bounds(&chrono::Local::now());

    let stats = db::fortunes::stats(&state.db, &req.username, today)
        .await
        .map_err(|e| {
            tracing::error!("Stats failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(stats))
}
