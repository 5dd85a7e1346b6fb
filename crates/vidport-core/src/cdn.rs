//! CDN route construction and media enrichment.
//!
//! Route formats:
//! - media:     `{storage_base_url}/ondemand/{account_id}/{filename}`
//! - thumbnail: `{progressive_base_url}/userdatanew/{account_id}/thumbnails/{filename}`
//! - player:    `{player_base_url}?injectSrc={percent-encoded media route}`
//!
//! All functions are pure: same record and configuration always produce the
//! same routes. Routes are computed on read and never persisted. Filenames
//! are trusted to be path-safe; upstream validation owns that check.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::CdnConfig;
use crate::models::{EnrichedMedia, EnrichedThumbnail, MediaRecord};

/// Characters escaped when embedding a route as a single query parameter.
/// Everything except `A-Za-z0-9 - _ . ! ~ * ' ( )` is percent-encoded,
/// matching the encoding the player endpoint expects for `injectSrc`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

impl CdnConfig {
    /// Build the playback URL for a media file on the storage CDN.
    pub fn media_route(&self, filename: &str) -> String {
        format!(
            "{}/ondemand/{}/{}",
            self.storage_base_url.trim_end_matches('/'),
            self.account_id,
            filename
        )
    }

    /// Build the thumbnail URL on the progressive CDN.
    pub fn thumbnail_route(&self, filename: &str) -> String {
        format!(
            "{}/userdatanew/{}/thumbnails/{}",
            self.progressive_base_url.trim_end_matches('/'),
            self.account_id,
            filename
        )
    }

    /// Build the player iframe URL with the media route injected as a
    /// percent-encoded query parameter.
    pub fn player_url(&self, media_route: &str) -> String {
        let encoded = utf8_percent_encode(media_route, QUERY_COMPONENT);
        format!("{}?injectSrc={}", self.player_base_url, encoded)
    }
}

/// Attach computed CDN routes to a stored record.
pub fn enrich(record: MediaRecord, cdn: &CdnConfig) -> EnrichedMedia {
    let mediaroute = cdn.media_route(&record.filedata.filename);
    let thumbnailroute = cdn.thumbnail_route(&record.thumbnail.filename);

    EnrichedMedia {
        id: record.id,
        title: record.title,
        description: record.description,
        duration: record.duration,
        tags: record.tags,
        filedata: record.filedata,
        thumbnail: EnrichedThumbnail {
            id: record.thumbnail.id,
            name: record.thumbnail.name,
            filename: record.thumbnail.filename,
            thumbnailroute,
        },
        mediaroute,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileData, Thumbnail};

    fn test_cdn() -> CdnConfig {
        CdnConfig {
            storage_base_url: "https://cdn.example".to_string(),
            progressive_base_url: "https://progressive.example".to_string(),
            player_base_url: "https://player.example/cms-player/default.iframe".to_string(),
            account_id: "acct1".to_string(),
        }
    }

    fn sample_record() -> MediaRecord {
        MediaRecord {
            id: "a".to_string(),
            title: "Demo".to_string(),
            description: String::new(),
            duration: 125.0,
            tags: String::new(),
            filedata: FileData {
                bitrate: 320.0,
                file_size: 1_048_576,
                filename: "demo.mp4".to_string(),
            },
            thumbnail: Thumbnail {
                id: "t1".to_string(),
                name: "thumb".to_string(),
                filename: "demo.jpg".to_string(),
            },
        }
    }

    #[test]
    fn test_media_route_format() {
        let cdn = test_cdn();
        assert_eq!(
            cdn.media_route("demo.mp4"),
            "https://cdn.example/ondemand/acct1/demo.mp4"
        );
    }

    #[test]
    fn test_thumbnail_route_format() {
        let cdn = test_cdn();
        assert_eq!(
            cdn.thumbnail_route("demo.jpg"),
            "https://progressive.example/userdatanew/acct1/thumbnails/demo.jpg"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let mut cdn = test_cdn();
        cdn.storage_base_url = "https://cdn.example/".to_string();
        assert_eq!(
            cdn.media_route("demo.mp4"),
            "https://cdn.example/ondemand/acct1/demo.mp4"
        );
    }

    #[test]
    fn test_player_url_encodes_route_as_single_parameter() {
        let cdn = test_cdn();
        let route = cdn.media_route("demo.mp4");
        let player = cdn.player_url(&route);
        assert_eq!(
            player,
            "https://player.example/cms-player/default.iframe?injectSrc=https%3A%2F%2Fcdn.example%2Fondemand%2Facct1%2Fdemo.mp4"
        );
    }

    #[test]
    fn test_enrich_attaches_routes() {
        let cdn = test_cdn();
        let enriched = enrich(sample_record(), &cdn);
        assert_eq!(
            enriched.mediaroute,
            "https://cdn.example/ondemand/acct1/demo.mp4"
        );
        assert_eq!(
            enriched.thumbnail.thumbnailroute,
            "https://progressive.example/userdatanew/acct1/thumbnails/demo.jpg"
        );
        // Persisted fields pass through untouched
        assert_eq!(enriched.id, "a");
        assert_eq!(enriched.filedata.filename, "demo.mp4");
        assert_eq!(enriched.thumbnail.filename, "demo.jpg");
    }

    #[test]
    fn test_enrich_is_idempotent() {
        let cdn = test_cdn();
        let first = enrich(sample_record(), &cdn);
        let second = enrich(sample_record(), &cdn);
        assert_eq!(first, second);
    }
}
