//! Route configuration and setup.

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Request bodies carry metadata only, never file content.
const REQUEST_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

const HTTP_CONCURRENCY_LIMIT: usize = 1024;

/// Setup all application routes
pub fn build_router(state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(&state)?;

    let api_routes = Router::new()
        .route("/getmedias", get(handlers::media_list::list_medias))
        .route("/addmedias", post(handlers::media_create::add_media))
        .route(
            "/medias/{id}",
            get(handlers::media_get::get_media)
                .put(handlers::media_update::update_media)
                .delete(handlers::media_delete::delete_media),
        );

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api", api_routes)
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .fallback(not_found)
        .with_state(state)
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(HTTP_CONCURRENCY_LIMIT))
        .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT_BYTES))
        .layer(cors);

    Ok(app)
}

fn setup_cors(state: &Arc<AppState>) -> Result<CorsLayer, anyhow::Error> {
    let origins = &state.config.cors_origins;

    let cors = if origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any)
    } else {
        let parsed: Result<Vec<HeaderValue>, _> = origins.iter().map(|o| o.parse()).collect();
        let parsed = parsed.map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    };

    Ok(cors)
}

/// Fallback for unmatched routes, mirroring the API's JSON error shape.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "error": "Endpoint not found",
            "message": "The requested endpoint does not exist",
        })),
    )
}
