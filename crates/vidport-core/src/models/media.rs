use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// File metadata for a stored media asset.
///
/// `fileSize` keeps its camelCase spelling on the wire and on disk; the
/// persisted JSON field names are a compatibility contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct FileData {
    /// Bitrate in kbps
    pub bitrate: f64,
    /// File size in bytes
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    /// Storage key of the media file on the CDN
    #[validate(length(min = 1, message = "filedata.filename must not be empty"))]
    pub filename: String,
}

/// Thumbnail metadata as persisted (no computed route).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Thumbnail {
    pub id: String,
    pub name: String,
    /// Storage key of the thumbnail file on the CDN
    #[validate(length(min = 1, message = "thumbnail.filename must not be empty"))]
    pub filename: String,
}

/// Media record as persisted, keyed by a unique opaque id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MediaRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Duration in seconds
    pub duration: f64,
    /// Comma-separated tag list (stored as a single string, not an array)
    pub tags: String,
    pub filedata: FileData,
    pub thumbnail: Thumbnail,
}

/// Thumbnail with its computed CDN route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrichedThumbnail {
    pub id: String,
    pub name: String,
    pub filename: String,
    /// Computed CDN URL for the thumbnail; never persisted
    pub thumbnailroute: String,
}

/// API-facing media record: all persisted fields plus computed CDN routes.
///
/// Derived on every read; routes are never written back to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrichedMedia {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub tags: String,
    pub filedata: FileData,
    pub thumbnail: EnrichedThumbnail,
    /// Computed CDN playback URL; never persisted
    pub mediaroute: String,
}

/// Request DTO for adding a new media record (everything but the id).
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMediaRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Duration in seconds; must be non-negative
    #[validate(range(min = 0.0, message = "duration must be a non-negative number"))]
    pub duration: f64,
    #[serde(default)]
    pub tags: String,
    #[validate(nested)]
    pub filedata: FileData,
    #[validate(nested)]
    pub thumbnail: Thumbnail,
}

/// Request DTO for updating a media record.
///
/// All fields optional. Replacement is shallow: a provided `filedata` or
/// `thumbnail` object fully replaces the stored one, no field-level merge.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMediaRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "duration must be a non-negative number"))]
    pub duration: Option<f64>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub filedata: Option<FileData>,
    #[serde(default)]
    #[validate(nested)]
    pub thumbnail: Option<Thumbnail>,
}

impl MediaRecord {
    /// Build a record from a validated create request and a freshly generated id.
    pub fn from_request(id: String, request: CreateMediaRequest) -> Self {
        MediaRecord {
            id,
            title: request.title,
            description: request.description,
            duration: request.duration,
            tags: request.tags,
            filedata: request.filedata,
            thumbnail: request.thumbnail,
        }
    }

    /// Apply a partial update in place (shallow field replace).
    pub fn apply_update(&mut self, update: UpdateMediaRequest) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(filedata) = update.filedata {
            self.filedata = filedata;
        }
        if let Some(thumbnail) = update.thumbnail {
            self.thumbnail = thumbnail;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> CreateMediaRequest {
        CreateMediaRequest {
            title: "Demo".to_string(),
            description: "A demo clip".to_string(),
            duration: 125.0,
            tags: "demo,corporate".to_string(),
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
    fn test_create_request_valid() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_negative_duration() {
        let mut request = sample_request();
        request.duration = -5.0;
        let err = request.validate().unwrap_err();
        assert!(err.field_errors().contains_key("duration"));
    }

    #[test]
    fn test_create_request_rejects_empty_title() {
        let mut request = sample_request();
        request.title = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_empty_filenames() {
        let mut request = sample_request();
        request.filedata.filename = String::new();
        assert!(request.validate().is_err());

        let mut request = sample_request();
        request.thumbnail.filename = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_file_size_serializes_camel_case() {
        let request = sample_request();
        let json = serde_json::to_value(&request.filedata).unwrap();
        assert!(json.get("fileSize").is_some());
        assert!(json.get("file_size").is_none());
    }

    #[test]
    fn test_apply_update_is_shallow() {
        let mut record = MediaRecord::from_request("a".to_string(), sample_request());
        let update = UpdateMediaRequest {
            filedata: Some(FileData {
                bitrate: 640.0,
                file_size: 42,
                filename: "other.mp4".to_string(),
            }),
            ..Default::default()
        };
        record.apply_update(update);

        // The whole filedata object is replaced, not merged
        assert_eq!(record.filedata.bitrate, 640.0);
        assert_eq!(record.filedata.file_size, 42);
        assert_eq!(record.filedata.filename, "other.mp4");
        // Untouched fields survive
        assert_eq!(record.title, "Demo");
        assert_eq!(record.thumbnail.filename, "demo.jpg");
    }

    #[test]
    fn test_update_request_rejects_negative_duration() {
        let update = UpdateMediaRequest {
            duration: Some(-1.0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
