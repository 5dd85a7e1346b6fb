//! Application setup and initialization
//!
//! All application initialization logic lives here rather than in main.rs,
//! so integration tests can build the same router against a scratch data
//! file.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vidport_core::Config;

/// Initialize logging. Called once from main; tests leave this untouched.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    for variable in Config::env_warnings() {
        tracing::warn!(variable, "Missing environment variable, using default");
    }

    let state = Arc::new(AppState::new(config));

    // Create the data directory and seed an empty collection on first run
    state
        .store
        .init_data_file()
        .await
        .context("Failed to initialize media data file")?;

    tracing::info!(
        data_file = %state.store.data_path().display(),
        "Configuration loaded and media store ready"
    );

    let router = routes::build_router(state.clone())?;

    Ok((state, router))
}
