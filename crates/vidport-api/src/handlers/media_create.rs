use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::response::ApiResponse;
use crate::state::AppState;
use vidport_core::enrich;
use vidport_core::models::CreateMediaRequest;

/// Add a new media record to the collection.
///
/// The request is validated before the store is touched; a generated id is
/// assigned at insert time and the enriched record is returned.
#[utoipa::path(
    post,
    path = "/api/addmedias",
    tag = "media",
    request_body = CreateMediaRequest,
    responses(
        (status = 201, description = "Media added successfully", body = serde_json::Value),
        (status = 400, description = "Invalid request - validation failed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn add_media(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateMediaRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(HttpAppError::from)?;

    let record = state.store.insert(request).await?;

    let response = ApiResponse::with_message(enrich(record, &state.cdn), "Media added successfully");
    Ok((StatusCode::CREATED, Json(response)))
}
