//! Configuration module
//!
//! Environment-backed configuration for the API and the CDN route builder.
//! Every variable has a development default; production refuses wildcard
//! CORS origins.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_DATA_FILE: &str = "data/medias.json";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";
const DEFAULT_STORAGE_CDN_BASE_URL: &str = "https://storagecdn.codev8.net";
const DEFAULT_PROGRESSIVE_CDN_BASE_URL: &str = "https://progressive.codev8.net";
const DEFAULT_PLAYER_BASE_URL: &str = "https://cdnapi.codev8.net/cms-player/default.iframe";
const DEFAULT_MEDIA_ACCOUNT_ID: &str = "b4ab8f95-bc2b-4d88-8ff0-df4df19d206c";

/// CDN configuration consumed by the enrichment layer.
#[derive(Clone, Debug)]
pub struct CdnConfig {
    pub storage_base_url: String,
    pub progressive_base_url: String,
    pub player_base_url: String,
    pub account_id: String,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Path of the persisted media collection (JSON array of records)
    pub data_file: PathBuf,
    pub cdn: CdnConfig,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            data_file: PathBuf::from(
                env::var("DATA_FILE_PATH").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string()),
            ),
            cdn: CdnConfig {
                storage_base_url: env::var("STORAGE_CDN_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_STORAGE_CDN_BASE_URL.to_string()),
                progressive_base_url: env::var("PROGRESSIVE_CDN_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_PROGRESSIVE_CDN_BASE_URL.to_string()),
                player_base_url: env::var("PLAYER_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_PLAYER_BASE_URL.to_string()),
                account_id: env::var("MEDIA_ACCOUNT_ID")
                    .unwrap_or_else(|_| DEFAULT_MEDIA_ACCOUNT_ID.to_string()),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.cdn.account_id.trim().is_empty() {
            return Err(anyhow::anyhow!("MEDIA_ACCOUNT_ID must not be empty"));
        }

        Ok(())
    }

    /// Environment variables that fell back to defaults but should be set
    /// explicitly in a real deployment. Callers log these at startup.
    pub fn env_warnings() -> Vec<&'static str> {
        const REQUIRED: &[&str] = &["MEDIA_ACCOUNT_ID"];
        REQUIRED
            .iter()
            .filter(|name| env::var(name).is_err())
            .copied()
            .collect()
    }
}
