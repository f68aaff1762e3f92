use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fortune_shared::api::{CreateRequest, PickRequest, PickResponse};
use fortune_shared::validation::{validate_author, validate_content, validate_request_username};
use std::sync::Arc;

use super::bad_request;
use crate::db;
use crate::AppState;

/// POST /pick
pub async fn pick(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PickRequest>, JsonRejection>,
) -> Result<impl IntoResponse, StatusCode> {
    let Json(req) = body.map_err(bad_request)?;
    validate_request_username(&req.username).map_err(bad_request)?;

    let fortune = db::fortunes::pick(&state.db, &req.username)
        .await
        .map_err(|e| {
            match e {
                sqlx::Error::RowNotFound => tracing::error!("Pick failed: no fortunes stored"),
                e => tracing::error!("Pick failed: {}", e),
            }
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(PickResponse::from(fortune)))
}

/// POST /create
pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, StatusCode> {
    let Json(req) = body.map_err(bad_request)?;
    validate_content(&req.content).map_err(bad_request)?;
    validate_author(&req.author).map_err(bad_request)?;
    validate_request_username(&req.username).map_err(bad_request)?;

    let counts = db::fortunes::create(&state.db, &req.content, &req.author, &req.username)
        .await
        .map_err(|e| {
            tracing::error!("Create failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    tracing::info!(
        username = %req.username,
        all_count = counts.all_count,
        "Fortune created"
    );

    Ok(Json(counts))
}
