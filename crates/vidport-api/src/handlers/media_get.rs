use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError};
use crate::response::ApiResponse;
use crate::state::AppState;
use vidport_core::{enrich, AppError};

/// Fetch a single media record by id, with computed CDN routes.
#[utoipa::path(
    get,
    path = "/api/medias/{id}",
    tag = "media",
    params(
        ("id" = String, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media found", body = serde_json::Value),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = state
        .store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Media not found".to_string()))?;

    Ok(Json(ApiResponse::data(enrich(record, &state.cdn))))
}
