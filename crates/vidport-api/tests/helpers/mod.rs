//! Shared helpers for API integration tests.

use axum_test::TestServer;
use std::path::PathBuf;
use tempfile::TempDir;
use vidport_api::setup;
use vidport_core::{CdnConfig, Config};

/// Test application with an isolated scratch data file.
pub struct TestApp {
    pub server: TestServer,
    pub data_path: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Configuration pointing at a scratch data file with stable CDN bases, so
/// route assertions are deterministic.
pub fn test_config(data_file: PathBuf) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        data_file,
        cdn: CdnConfig {
            storage_base_url: "https://cdn.example".to_string(),
            progressive_base_url: "https://progressive.example".to_string(),
            player_base_url: "https://player.example/cms-player/default.iframe".to_string(),
            account_id: "acct1".to_string(),
        },
    }
}

/// Setup a test application over an empty, isolated collection.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let data_path = temp_dir.path().join("medias.json");

    let config = test_config(data_path.clone());
    let (_state, router) = setup::initialize_app(config)
        .await
        .expect("Failed to initialize app");

    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        data_path,
        _temp_dir: temp_dir,
    }
}

/// A well-formed create request body.
pub fn sample_media_body() -> serde_json::Value {
    serde_json::json!({
        "title": "Demo",
        "description": "A corporate clip",
        "duration": 125.0,
        "tags": "demo,corporate",
        "filedata": {
            "bitrate": 320.0,
            "fileSize": 1048576,
            "filename": "demo.mp4"
        },
        "thumbnail": {
            "id": "t1",
            "name": "thumb",
            "filename": "demo.jpg"
        }
    })
}
