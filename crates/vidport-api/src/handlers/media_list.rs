use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError};
use crate::response::ApiResponse;
use crate::state::AppState;
use vidport_core::enrich;
use vidport_core::models::EnrichedMedia;

/// List every media record with computed CDN routes.
#[utoipa::path(
    get,
    path = "/api/getmedias",
    tag = "media",
    responses(
        (status = 200, description = "All media with computed routes", body = serde_json::Value),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_medias(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.store.list_all().await?;

    let medias: Vec<EnrichedMedia> = records
        .into_iter()
        .map(|record| enrich(record, &state.cdn))
        .collect();

    let message = format!("Retrieved {} media(s)", medias.len());
    Ok(Json(ApiResponse::with_message(medias, message)))
}
