use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::response::ApiResponse;
use crate::state::AppState;
use vidport_core::models::UpdateMediaRequest;
use vidport_core::{enrich, AppError};

/// Update fields of an existing media record.
///
/// Replacement is shallow: a provided `filedata` or `thumbnail` object fully
/// replaces the stored one.
#[utoipa::path(
    put,
    path = "/api/medias/{id}",
    tag = "media",
    params(
        ("id" = String, Path, description = "Media ID")
    ),
    request_body = UpdateMediaRequest,
    responses(
        (status = 200, description = "Media updated successfully", body = serde_json::Value),
        (status = 400, description = "Invalid request - validation failed", body = ErrorResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMediaRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(HttpAppError::from)?;

    let record = state
        .store
        .update(&id, request)
        .await?
        .ok_or_else(|| AppError::NotFound("Media not found".to_string()))?;

    Ok(Json(ApiResponse::data(enrich(record, &state.cdn))))
}
