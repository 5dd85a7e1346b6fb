//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use vidport_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vidport API",
        version = "0.1.0",
        description = "Corporate video portal backend. Stores media metadata in a JSON collection and serves records enriched with computed CDN playback and thumbnail routes."
    ),
    paths(
        handlers::media_list::list_medias,
        handlers::media_get::get_media,
        handlers::media_create::add_media,
        handlers::media_update::update_media,
        handlers::media_delete::delete_media,
    ),
    components(schemas(
        models::MediaRecord,
        models::EnrichedMedia,
        models::EnrichedThumbnail,
        models::FileData,
        models::Thumbnail,
        models::CreateMediaRequest,
        models::UpdateMediaRequest,
        error::ErrorResponse,
    )),
    tags(
        (name = "media", description = "Media collection CRUD and playback routes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_contains_all_media_paths() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/api/getmedias"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/addmedias"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/medias/{id}"));
    }
}
