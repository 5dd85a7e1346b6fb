//! Health check handler.

use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

/// Liveness probe - process is running and configuration is loaded.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "message": "Backend is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "environment": state.config.environment,
    }))
}
