use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use vidport_core::models::{CreateMediaRequest, MediaRecord, UpdateMediaRequest};

/// File-backed media store.
///
/// Every operation is a full read-modify-write of the data file; there is no
/// in-memory cache across calls. Mutations serialize the whole collection
/// back to disk, pretty-printed with 2-space indentation for diffability.
///
/// Writers within the process are serialized by an async mutex, and each
/// write lands in a sibling temp file that is fsynced and renamed over the
/// data file, so a failed write never leaves a half-written collection.
/// Writers in other processes are not coordinated; last rename wins.
#[derive(Clone)]
pub struct MediaStore {
    data_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl MediaStore {
    /// Create a store over the given data file.
    ///
    /// The file is not touched here; a missing file surfaces as a
    /// `ReadFailed` on first use. See [`MediaStore::init_data_file`] for
    /// startup seeding.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        MediaStore {
            data_path: data_path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Create the parent directory and seed an empty collection if the data
    /// file does not exist yet. Intended for application startup.
    pub async fn init_data_file(&self) -> StoreResult<()> {
        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StoreError::WriteFailed {
                        path: self.data_path.clone(),
                        source,
                    })?;
            }
        }

        if !fs::try_exists(&self.data_path).await.unwrap_or(false) {
            tracing::info!(path = %self.data_path.display(), "Seeding empty media collection");
            self.persist(&[]).await?;
        }

        Ok(())
    }

    /// Load the entire persisted collection.
    async fn load(&self) -> StoreResult<Vec<MediaRecord>> {
        let bytes = fs::read(&self.data_path)
            .await
            .map_err(|source| StoreError::ReadFailed {
                path: self.data_path.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.data_path.clone(),
            source,
        })
    }

    /// Rewrite the whole collection: serialize to a sibling temp file,
    /// fsync, then rename over the data file.
    async fn persist(&self, records: &[MediaRecord]) -> StoreResult<()> {
        let write_failed = |source: io::Error| StoreError::WriteFailed {
            path: self.data_path.clone(),
            source,
        };

        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| write_failed(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let mut tmp_path = self.data_path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        let mut file = fs::File::create(&tmp_path).await.map_err(write_failed)?;
        file.write_all(&json).await.map_err(write_failed)?;
        file.write_all(b"\n").await.map_err(write_failed)?;
        file.sync_all().await.map_err(write_failed)?;
        drop(file);

        fs::rename(&tmp_path, &self.data_path)
            .await
            .map_err(write_failed)
    }

    /// Return every record in the collection, in insertion order.
    pub async fn list_all(&self) -> StoreResult<Vec<MediaRecord>> {
        self.load().await
    }

    /// Find a record by id. Absence is a normal outcome, never an error.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<MediaRecord>> {
        let records = self.load().await?;
        Ok(records.into_iter().find(|m| m.id == id))
    }

    /// Append a new record with a freshly generated id and persist the
    /// whole collection.
    pub async fn insert(&self, request: CreateMediaRequest) -> StoreResult<MediaRecord> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let record = MediaRecord::from_request(Uuid::new_v4().to_string(), request);
        records.push(record.clone());
        self.persist(&records).await?;

        tracing::info!(
            id = %record.id,
            path = %self.data_path.display(),
            total = records.len(),
            "Media record inserted"
        );

        Ok(record)
    }

    /// Apply a partial update (shallow field replace) and persist. Returns
    /// `Ok(None)` when no record matches the id.
    pub async fn update(
        &self,
        id: &str,
        update: UpdateMediaRequest,
    ) -> StoreResult<Option<MediaRecord>> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let Some(record) = records.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        record.apply_update(update);
        let updated = record.clone();
        self.persist(&records).await?;

        tracing::info!(id = %id, "Media record updated");

        Ok(Some(updated))
    }

    /// Remove a record by id. The collection is only rewritten when a record
    /// was actually removed; removing an unknown id leaves the file untouched.
    pub async fn remove(&self, id: &str) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let initial_len = records.len();
        records.retain(|m| m.id != id);
        let removed = records.len() < initial_len;

        if removed {
            self.persist(&records).await?;
            tracing::info!(id = %id, remaining = records.len(), "Media record removed");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;
    use vidport_core::models::{FileData, Thumbnail};

    fn sample_request(title: &str, filename: &str) -> CreateMediaRequest {
        CreateMediaRequest {
            title: title.to_string(),
            description: "A corporate clip".to_string(),
            duration: 125.0,
            tags: "demo,corporate".to_string(),
            filedata: FileData {
                bitrate: 320.0,
                file_size: 1_048_576,
                filename: filename.to_string(),
            },
            thumbnail: Thumbnail {
                id: "t1".to_string(),
                name: "thumb".to_string(),
                filename: "demo.jpg".to_string(),
            },
        }
    }

    fn empty_store(dir: &tempfile::TempDir) -> MediaStore {
        let path = dir.path().join("medias.json");
        std::fs::write(&path, "[]").unwrap();
        MediaStore::new(path)
    }

    #[tokio::test]
    async fn test_insert_get_round_trip() {
        let dir = tempdir().unwrap();
        let store = empty_store(&dir);

        let inserted = store.insert(sample_request("Demo", "demo.mp4")).await.unwrap();
        let fetched = store.get_by_id(&inserted.id).await.unwrap().unwrap();

        assert_eq!(inserted, fetched);
        assert_eq!(fetched.title, "Demo");
        assert_eq!(fetched.filedata.filename, "demo.mp4");
    }

    #[tokio::test]
    async fn test_insert_generates_unique_ids() {
        let dir = tempdir().unwrap();
        let store = empty_store(&dir);

        let mut ids = HashSet::new();
        for i in 0..20 {
            let record = store
                .insert(sample_request(&format!("Clip {i}"), "clip.mp4"))
                .await
                .unwrap();
            assert!(ids.insert(record.id), "duplicate id generated");
        }
        assert_eq!(store.list_all().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none_not_error() {
        let dir = tempdir().unwrap();
        let store = empty_store(&dir);

        assert!(store.get_by_id("no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_nonexistent_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let store = empty_store(&dir);
        store.insert(sample_request("Keep", "keep.mp4")).await.unwrap();

        let before = std::fs::read(store.data_path()).unwrap();
        assert!(!store.remove("no-such-id").await.unwrap());
        let after = std::fs::read(store.data_path()).unwrap();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_remove_existing_deletes_exactly_one() {
        let dir = tempdir().unwrap();
        let store = empty_store(&dir);

        let a = store.insert(sample_request("A", "a.mp4")).await.unwrap();
        let b = store.insert(sample_request("B", "b.mp4")).await.unwrap();

        assert!(store.remove(&a.id).await.unwrap());

        let remaining = store.list_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0], b);
    }

    #[tokio::test]
    async fn test_remove_last_record_yields_empty_collection() {
        let dir = tempdir().unwrap();
        let store = empty_store(&dir);

        let only = store.insert(sample_request("Only", "only.mp4")).await.unwrap();
        assert!(store.remove(&only.id).await.unwrap());

        let records = store.list_all().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_update_shallow_replaces_filedata() {
        let dir = tempdir().unwrap();
        let store = empty_store(&dir);

        let record = store.insert(sample_request("Demo", "demo.mp4")).await.unwrap();
        let updated = store
            .update(
                &record.id,
                UpdateMediaRequest {
                    filedata: Some(FileData {
                        bitrate: 640.0,
                        file_size: 42,
                        filename: "replaced.mp4".to_string(),
                    }),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.filedata.filename, "replaced.mp4");
        assert_eq!(updated.filedata.file_size, 42);
        // Fields that were not part of the update survive
        assert_eq!(updated.title, "Demo");

        // The change is durable, not just in the returned copy
        let fetched = store.get_by_id(&record.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_absent_id_is_none() {
        let dir = tempdir().unwrap();
        let store = empty_store(&dir);

        let result = store
            .update("no-such-id", UpdateMediaRequest::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_read_failed() {
        let dir = tempdir().unwrap();
        let store = MediaStore::new(dir.path().join("absent.json"));

        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, StoreError::ReadFailed { .. }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("medias.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = MediaStore::new(path);

        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_persisted_format_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let store = empty_store(&dir);
        store.insert(sample_request("Demo", "demo.mp4")).await.unwrap();

        let content = std::fs::read_to_string(store.data_path()).unwrap();
        // 2-space indented array of objects, camelCase fileSize on disk
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"fileSize\": 1048576"));
        assert!(!content.contains("file_size"));
    }

    #[tokio::test]
    async fn test_init_data_file_seeds_missing_collection() {
        let dir = tempdir().unwrap();
        let store = MediaStore::new(dir.path().join("nested").join("medias.json"));

        store.init_data_file().await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());

        // A second init must not clobber existing data
        store.insert(sample_request("Kept", "kept.mp4")).await.unwrap();
        store.init_data_file().await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blocked_parent_is_write_failed() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        // Parent path is a regular file, so creating the data directory fails
        let store = MediaStore::new(blocker.join("medias.json"));
        let err = store.init_data_file().await.unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));
    }
}
