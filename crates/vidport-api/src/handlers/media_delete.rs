use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError};
use crate::response::ApiResponse;
use crate::state::AppState;
use vidport_core::AppError;

/// Delete a media record by id.
#[utoipa::path(
    delete,
    path = "/api/medias/{id}",
    tag = "media",
    params(
        ("id" = String, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media deleted successfully", body = serde_json::Value),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.store.remove(&id).await?;

    if !deleted {
        return Err(HttpAppError::from(AppError::NotFound(
            "Media not found".to_string(),
        )));
    }

    Ok(Json(ApiResponse::message_only("Media deleted successfully")))
}
