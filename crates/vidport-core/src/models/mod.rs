//! Domain models

pub mod media;

pub use media::{
    CreateMediaRequest, EnrichedMedia, EnrichedThumbnail, FileData, MediaRecord, Thumbnail,
    UpdateMediaRequest,
};
