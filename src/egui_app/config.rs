use std::path::PathBuf;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, DEFAULT_SERVER_URL};
use crate::shared::error::SessionError;

/// Environment override for the API host
const API_URL_ENV: &str = "BENEVITS_API_URL";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let mut app = AppConfig::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            app.server_url = Some(url);
        }
        if app.validate().is_err() {
            tracing::warn!("[CONFIG] Ignoring invalid {}, falling back to {}", API_URL_ENV, DEFAULT_SERVER_URL);
            app.server_url = None;
        }
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url().trim_end_matches('/'), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn use_mock_data(&self) -> bool {
        self.app.use_mock_data
    }

    /// File holding the secure-store entries for this service
    pub fn session_path(&self) -> Result<PathBuf, SessionError> {
        let dir = match &self.app.session_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir().ok_or(SessionError::NoDataDir)?.join("benevits"),
        };
        Ok(dir.join(format!("{}.json", self.app.session_service)))
    }
}
