//! Application state.
//!
//! Constructed once at startup and injected into handlers through Axum's
//! `State` extractor; there is no module-level singleton.

use vidport_core::{CdnConfig, Config};
use vidport_store::MediaStore;

#[derive(Clone)]
pub struct AppState {
    pub store: MediaStore,
    pub cdn: CdnConfig,
    pub config: Config,
    pub is_production: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = MediaStore::new(&config.data_file);
        let cdn = config.cdn.clone();
        let is_production = config.is_production();
        AppState {
            store,
            cdn,
            config,
            is_production,
        }
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
